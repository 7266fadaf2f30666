//! Mapping von Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, LabelSource};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::DrawingLoadRequested { path } => vec![AppCommand::LoadDrawing { path }],
        AppIntent::CurvesPicked { curve_ids, labels } => vec![AppCommand::AnalyzeCurves {
            curve_ids,
            label_texts: resolve_labels(state, &labels),
        }],
        AppIntent::SelectionFinished => vec![AppCommand::BuildReport],
        AppIntent::UnitConversionRequested { from, to } => {
            vec![AppCommand::ConvertUnits { from, to }]
        }
        AppIntent::ExportRequested { path } => vec![AppCommand::ExportReport { path }],
        AppIntent::LayerAnalysisRequested { layers } => vec![AppCommand::AnalyzeLayers { layers }],
        AppIntent::SessionResetRequested => vec![AppCommand::ClearSession],
    }
}

/// Löst Entity-Verweise in Texte auf; leere Texte entfallen.
fn resolve_labels(state: &AppState, labels: &[LabelSource]) -> Vec<String> {
    labels
        .iter()
        .filter_map(|label| match label {
            LabelSource::Literal(text) => Some(text.clone()),
            LabelSource::Entity(entity) => state.drawing.as_ref().and_then(|drawing| {
                drawing.entity_text(*entity, state.options.leader_search_radius)
            }),
        })
        .filter(|text| !text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Annotation, Drawing, EntityRef, Leader};
    use glam::DVec3;

    #[test]
    fn entity_beschriftungen_werden_aufgeloest() {
        let mut drawing = Drawing::new();
        drawing.annotations.push(Annotation::new(DVec3::ZERO, "DN100"));
        drawing.annotations.push(Annotation::new(DVec3::X, ""));
        drawing.leaders.push(Leader {
            vertices: vec![DVec3::new(50.0, 0.0, 0.0)],
            has_arrowhead: true,
            text: None,
        });
        let mut state = AppState::new();
        state.drawing = Some(drawing);

        let commands = map_intent_to_commands(
            &state,
            AppIntent::CurvesPicked {
                curve_ids: vec![1],
                labels: vec![
                    LabelSource::Entity(EntityRef::Text(0)),
                    LabelSource::Entity(EntityRef::Text(1)),
                    LabelSource::Entity(EntityRef::Leader(0)),
                    LabelSource::Literal("B".into()),
                ],
            },
        );

        assert_eq!(
            commands,
            vec![AppCommand::AnalyzeCurves {
                curve_ids: vec![1],
                label_texts: vec!["DN100".into(), "B".into()],
            }]
        );
    }
}
