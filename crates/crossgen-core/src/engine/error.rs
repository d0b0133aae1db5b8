use thiserror::Error;

use super::analysis::AnalysisError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Segment analysis failed: {source}")]
    Analysis {
        #[from]
        source: AnalysisError,
    },

    #[error("Trial {trial} failed: {source}")]
    Trial {
        trial: usize,
        #[source]
        source: Box<EngineError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::analysis::Segment;
    use std::error::Error as _;

    #[test]
    fn trial_error_names_the_trial_and_keeps_the_cause() {
        let analysis: EngineError = AnalysisError::DegenerateSegment {
            segment: Segment::B,
        }
        .into();
        let error = EngineError::Trial {
            trial: 7,
            source: Box::new(analysis),
        };

        let message = error.to_string();
        assert!(message.starts_with("Trial 7 failed"));
        assert!(message.contains("2-3"));
        assert!(matches!(
            error.source().and_then(|e| e.downcast_ref::<EngineError>()),
            Some(EngineError::Analysis { .. })
        ));
    }
}
