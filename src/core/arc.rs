//! Kreisbogen-Parametrisierung für Bogensegmente von Polylinien.
//!
//! Der Parameter eines Bogens ist der Winkel (Radiant) um die Bogennormale,
//! gemessen ab der Referenzrichtung. Bogenlängen werden ausschließlich über
//! diese Parametrisierung bestimmt (Radius × Parameterdifferenz).

use std::f64::consts::TAU;

use glam::DVec3;

/// Toleranz für die Parameterbestimmung eines Punktes auf dem Bogen.
pub const ARC_PARAMETER_TOLERANCE: f64 = 1e-10;

/// Kreisbogen im Raum, gegen den Uhrzeigersinn um `normal` orientiert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularArc {
    center: DVec3,
    radius: f64,
    normal: DVec3,
    reference: DVec3,
    start_angle: f64,
    end_angle: f64,
}

impl CircularArc {
    /// Erstellt einen Bogen aus Mittelpunkt, Radius, Ebene und Winkelbereich.
    ///
    /// `reference` wird in die Bogenebene projiziert. Gibt `None` bei
    /// entartetem Radius, Normale oder Winkelbereich (`end <= start` oder
    /// mehr als ein Vollkreis).
    pub fn new(
        center: DVec3,
        radius: f64,
        normal: DVec3,
        reference: DVec3,
        start_angle: f64,
        end_angle: f64,
    ) -> Option<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return None;
        }
        if !start_angle.is_finite() || !end_angle.is_finite() {
            return None;
        }
        if end_angle <= start_angle || end_angle - start_angle > TAU {
            return None;
        }

        let normal = normal.try_normalize()?;
        let reference = (reference - normal * reference.dot(normal)).try_normalize()?;

        Some(Self {
            center,
            radius,
            normal,
            reference,
            start_angle,
            end_angle,
        })
    }

    /// Baut den Bogen zwischen zwei Polylinien-Vertices aus deren Bulge.
    ///
    /// Bulge = tan(Öffnungswinkel / 4); positiv = gegen den Uhrzeigersinn in
    /// der XY-Ebene, negativ = im Uhrzeigersinn. Die Sehne wird in der
    /// XY-Ebene gemessen (Vertices einer Polylinie teilen die Erhebung).
    pub fn from_bulge(start: DVec3, end: DVec3, bulge: f64) -> Option<Self> {
        if !bulge.is_finite() || bulge.abs() <= ARC_PARAMETER_TOLERANCE {
            return None;
        }

        let chord = DVec3::new(end.x - start.x, end.y - start.y, 0.0);
        let chord_length = chord.length();
        if chord_length <= f64::EPSILON {
            return None;
        }

        let sweep = 4.0 * bulge.abs().atan();
        let half_sweep = sweep * 0.5;
        let radius = chord_length * 0.5 / half_sweep.sin();

        let normal = if bulge > 0.0 { DVec3::Z } else { DVec3::NEG_Z };
        // Mittelpunkt links der Sehne (bezogen auf die Normale); bei
        // Öffnungswinkeln > π wird der Abstand negativ und wandert nach rechts.
        let left = normal.cross(chord / chord_length);
        let midpoint = (start + end) * 0.5;
        let center = midpoint + left * (chord_length * 0.5 / half_sweep.tan());

        Self::new(center, radius, normal, start - center, 0.0, sweep)
    }

    /// Mittelpunkt des Bogens.
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Radius des Bogens.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Öffnungswinkel in Radiant.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Gesamtlänge des Bogens.
    pub fn length(&self) -> f64 {
        self.radius * self.sweep()
    }

    /// Punkt auf dem Trägerkreis für den Parameter `param`.
    pub fn point_at(&self, param: f64) -> DVec3 {
        let binormal = self.normal.cross(self.reference);
        self.center + self.radius * (param.cos() * self.reference + param.sin() * binormal)
    }

    /// Startpunkt des Bogens.
    pub fn start_point(&self) -> DVec3 {
        self.point_at(self.start_angle)
    }

    /// Endpunkt des Bogens.
    pub fn end_point(&self) -> DVec3 {
        self.point_at(self.end_angle)
    }

    /// Bestimmt den Parameter eines Punktes auf dem Bogen.
    ///
    /// Der Punkt wird in die Bogenebene projiziert. Winkel, die innerhalb von
    /// `tolerance` vor dem Start liegen, werden nicht um einen Vollkreis
    /// verschoben. Punkte in der Bogenlücke landen auf dem näheren Ende.
    pub fn param_of(&self, point: DVec3, tolerance: f64) -> f64 {
        let offset = point - self.center;
        let binormal = self.normal.cross(self.reference);
        let raw = offset.dot(binormal).atan2(offset.dot(self.reference));

        // Auf [start - tol, start + 2π - tol) normalisieren
        let angle = self.start_angle + (raw - self.start_angle + tolerance).rem_euclid(TAU) - tolerance;

        if angle <= self.end_angle + tolerance {
            return angle.clamp(self.start_angle, self.end_angle);
        }

        let past_end = angle - self.end_angle;
        let before_start = self.start_angle + TAU - angle;
        if past_end <= before_start {
            self.end_angle
        } else {
            self.start_angle
        }
    }

    /// Bogenlänge zwischen den Parametern zweier Punkte.
    pub fn length_between(&self, from: DVec3, to: DVec3, tolerance: f64) -> f64 {
        let from_param = self.param_of(from, tolerance);
        let to_param = self.param_of(to, tolerance);
        self.radius * (to_param - from_param).abs()
    }
}
