//! Räumliche Zuordnung: nächster Marker innerhalb einer Toleranz.
//!
//! Die Suche ist ein Fold mit laufendem Minimum. Ein Kandidat ersetzt den
//! bisherigen Treffer nur bei Abstand strikt kleiner als Toleranz und
//! bisheriges Minimum; bei exakt gleichem Abstand gewinnt der zuerst
//! gefundene Kandidat.

use std::collections::HashMap;

use glam::DVec3;
use kiddo::{KdTree, SquaredEuclidean};

use super::{Annotation, Marker};

/// Relativer Rundungsspielraum der gedrehten Koordinaten.
const ROTATION_MARGIN: f64 = 1e-12;

/// Cosinus/Sinus der Index-Drehung (0.5 rad).
const INDEX_ROTATION_COS: f64 = 0.877_582_561_890_372_8;
const INDEX_ROTATION_SIN: f64 = 0.479_425_538_604_203;

/// Treffer einer Marker-Suche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestMarker<'a> {
    /// Index des Markers in der Kandidatenliste
    pub index: usize,
    /// Gefundener Marker
    pub marker: &'a Marker,
    /// Euklidischer Abstand zum Suchpunkt
    pub distance: f64,
}

/// Findet den nächsten Marker mit Abstand strikt kleiner als `tolerance`.
pub fn nearest_marker(point: DVec3, candidates: &[Marker], tolerance: f64) -> Option<NearestMarker<'_>> {
    fold_nearest(point, candidates.iter().enumerate(), tolerance)
}

fn fold_nearest<'a>(
    point: DVec3,
    candidates: impl Iterator<Item = (usize, &'a Marker)>,
    tolerance: f64,
) -> Option<NearestMarker<'a>> {
    candidates
        .fold((f64::INFINITY, None), |(best_distance, best), (index, marker)| {
            let distance = point.distance(marker.position);
            if distance < tolerance && distance < best_distance {
                (
                    distance,
                    Some(NearestMarker {
                        index,
                        marker,
                        distance,
                    }),
                )
            } else {
                (best_distance, best)
            }
        })
        .1
}

/// Erster Text (in Listenreihenfolge) innerhalb von `radius` um `position`.
pub fn find_annotation_near(position: DVec3, annotations: &[Annotation], radius: f64) -> Option<&Annotation> {
    annotations
        .iter()
        .find(|annotation| position.distance(annotation.position) <= radius)
}

/// Read-only KD-Tree über den Marker-Positionen einer Zeichnung.
///
/// Der Baum filtert in der XY-Ebene vor; das Ergebnis entsteht über denselben
/// Fold wie [`nearest_marker`] in ursprünglicher Kandidatenreihenfolge und ist
/// daher identisch zur linearen Suche. Achsenparallele Marker-Reihen würden
/// den Bucket-Split überlasten, deshalb wird gedreht eingefügt und jede
/// XY-Position nur einmal indexiert.
#[derive(Debug, Clone)]
pub struct MarkerIndex {
    tree: KdTree<f64, 2>,
    positions: Vec<Vec<usize>>,
    marker_count: usize,
    coord_scale: f64,
}

impl MarkerIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            positions: Vec::new(),
            marker_count: 0,
            coord_scale: 0.0,
        }
    }

    /// Baut einen Index über die übergebenen Marker.
    pub fn from_markers(markers: &[Marker]) -> Self {
        let mut slot_by_position: HashMap<[u64; 2], usize> = HashMap::new();
        let mut positions: Vec<Vec<usize>> = Vec::new();
        let mut entries: Vec<[f64; 2]> = Vec::new();
        let mut coord_scale: f64 = 0.0;

        for (index, marker) in markers.iter().enumerate() {
            let key = [marker.position.x.to_bits(), marker.position.y.to_bits()];
            match slot_by_position.get(&key) {
                Some(&slot) => positions[slot].push(index),
                None => {
                    slot_by_position.insert(key, positions.len());
                    positions.push(vec![index]);
                    entries.push(rotate(marker.position));
                    coord_scale = coord_scale.max(xy_scale(marker.position));
                }
            }
        }

        let tree: KdTree<f64, 2> = (&entries).into();

        Self {
            tree,
            positions,
            marker_count: markers.len(),
            coord_scale,
        }
    }

    /// Gibt die Anzahl indexierter Marker zurück.
    pub fn len(&self) -> usize {
        self.marker_count
    }

    /// Gibt `true` zurück, wenn keine Marker im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.marker_count == 0
    }

    /// Nächster Marker mit Abstand strikt kleiner als `tolerance`.
    ///
    /// `markers` muss dieselbe Liste sein, aus der der Index gebaut wurde.
    pub fn nearest_within<'a>(
        &self,
        markers: &'a [Marker],
        point: DVec3,
        tolerance: f64,
    ) -> Option<NearestMarker<'a>> {
        if self.is_empty() || tolerance.is_nan() || tolerance <= 0.0 {
            return None;
        }

        // Vorfilter großzügig, die exakte Prüfung macht der Fold.
        // Die Drehung rundet relativ zur Koordinatengröße, nicht zur Toleranz.
        let margin = ROTATION_MARGIN * self.coord_scale.max(xy_scale(point));
        let radius = tolerance * (1.0 + 1e-9) + margin;
        let radius_sq = if radius.is_finite() {
            radius * radius
        } else {
            f64::MAX
        };

        let mut candidates: Vec<usize> = self
            .tree
            .within::<SquaredEuclidean>(&rotate(point), radius_sq)
            .into_iter()
            .filter_map(|entry| self.positions.get(entry.item as usize))
            .flatten()
            .copied()
            .filter(|&index| index < markers.len())
            .collect();
        candidates.sort_unstable();

        fold_nearest(
            point,
            candidates.into_iter().map(|index| (index, &markers[index])),
            tolerance,
        )
    }
}

fn xy_scale(position: DVec3) -> f64 {
    position.x.abs().max(position.y.abs())
}

fn rotate(position: DVec3) -> [f64; 2] {
    [
        position.x * INDEX_ROTATION_COS - position.y * INDEX_ROTATION_SIN,
        position.x * INDEX_ROTATION_SIN + position.y * INDEX_ROTATION_COS,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_markers() -> Vec<Marker> {
        vec![
            Marker::new(DVec3::new(0.0, 0.0, 0.0), "A"),
            Marker::new(DVec3::new(10.0, 0.0, 0.0), "B"),
            Marker::new(DVec3::new(0.3, 0.4, 0.0), "C"),
        ]
    }

    #[test]
    fn nearest_returns_closest_within_tolerance() {
        let markers = sample_markers();
        let hit = nearest_marker(DVec3::new(0.3, 0.5, 0.0), &markers, 1.0).expect("Treffer erwartet");

        assert_eq!(hit.marker.name, "C");
        assert_eq!(hit.index, 2);
        assert!(hit.distance < 0.2);
    }

    #[test]
    fn marker_ausserhalb_der_toleranz_wird_nie_gewaehlt() {
        let markers = vec![Marker::new(DVec3::new(1.5, 0.0, 0.0), "WEIT")];

        assert!(nearest_marker(DVec3::ZERO, &markers, 1.0).is_none());
    }

    #[test]
    fn abstand_gleich_toleranz_ist_kein_treffer() {
        let markers = vec![Marker::new(DVec3::new(1.0, 0.0, 0.0), "GRENZE")];

        assert!(nearest_marker(DVec3::ZERO, &markers, 1.0).is_none());
    }

    #[test]
    fn bei_gleichstand_gewinnt_der_erste_kandidat() {
        let markers = vec![
            Marker::new(DVec3::new(0.5, 0.0, 0.0), "ERSTER"),
            Marker::new(DVec3::new(-0.5, 0.0, 0.0), "ZWEITER"),
        ];
        let hit = nearest_marker(DVec3::ZERO, &markers, 1.0).expect("Treffer erwartet");

        assert_eq!(hit.marker.name, "ERSTER");
    }

    #[test]
    fn keine_kandidaten_liefert_none() {
        assert!(nearest_marker(DVec3::ZERO, &[], 1.0).is_none());
    }

    #[test]
    fn text_suche_nimmt_ersten_treffer_im_radius() {
        let annotations = vec![
            Annotation::new(DVec3::new(20.0, 0.0, 0.0), "zu weit"),
            Annotation::new(DVec3::new(9.0, 0.0, 0.0), "erster"),
            Annotation::new(DVec3::new(1.0, 0.0, 0.0), "naeher, aber spaeter"),
        ];
        let hit = find_annotation_near(DVec3::ZERO, &annotations, 10.0).expect("Text erwartet");

        assert_eq!(hit.text, "erster");
        assert!(find_annotation_near(DVec3::new(100.0, 0.0, 0.0), &annotations, 10.0).is_none());
    }

    #[test]
    fn text_genau_auf_dem_radius_zaehlt() {
        let annotations = vec![Annotation::new(DVec3::new(5.0, 0.0, 0.0), "rand")];

        assert!(find_annotation_near(DVec3::ZERO, &annotations, 5.0).is_some());
    }

    #[test]
    fn index_liefert_dasselbe_wie_lineare_suche() {
        // Achsenparallele Reihe mit doppelten Positionen und Höhenversatz
        let mut markers = Vec::new();
        for i in 0..120 {
            let x = (i % 40) as f64 * 0.7;
            let z = if i >= 80 { 0.3 } else { 0.0 };
            markers.push(Marker::new(DVec3::new(x, 5.0, z), format!("M{i}")));
        }
        let index = MarkerIndex::from_markers(&markers);
        assert_eq!(index.len(), 120);

        for q in 0..60 {
            let point = DVec3::new(q as f64 * 0.47, 5.0 + (q % 3) as f64 * 0.2, 0.1);
            let linear = nearest_marker(point, &markers, 1.0).map(|m| m.index);
            let indexed = index.nearest_within(&markers, point, 1.0).map(|m| m.index);
            assert_eq!(linear, indexed, "Abfrage {q}");
        }
    }

    #[test]
    fn index_stimmt_bei_grossen_koordinaten_mit_linearer_suche_ueberein() {
        // Vermessungskoordinaten in mm, Marker knapp innerhalb der Toleranz
        let centers: Vec<DVec3> = (0..400)
            .map(|k| DVec3::new(4e9 + k as f64 * 10.0, 3e9 - k as f64 * 7.0, 0.0))
            .collect();
        let markers: Vec<Marker> = centers
            .iter()
            .enumerate()
            .map(|(k, center)| {
                let angle = k as f64 * 0.0157;
                let offset = DVec3::new(angle.cos(), angle.sin(), 0.0) * (1.0 - 1e-7);
                Marker::new(*center + offset, format!("M{k}"))
            })
            .collect();
        let index = MarkerIndex::from_markers(&markers);

        let mut hits = 0;
        for (k, center) in centers.iter().enumerate() {
            let linear = nearest_marker(*center, &markers, 1.0).map(|m| m.index);
            let indexed = index.nearest_within(&markers, *center, 1.0).map(|m| m.index);
            assert_eq!(linear, indexed, "Abfrage {k}");
            hits += usize::from(linear.is_some());
        }
        assert!(hits > 0);
    }

    #[test]
    fn leerer_index_findet_nichts() {
        let index = MarkerIndex::empty();

        assert!(index.is_empty());
        assert!(index.nearest_within(&[], DVec3::ZERO, 1.0).is_none());
    }
}
