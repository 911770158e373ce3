//! Validation engine boundary

use crate::config::{TargetEnv, ValidatorOptions};
use crate::diag::{Diagnostic, MessageConsumer, Severity};

/// Contract between the front end and a validation engine.
///
/// One synchronous call per run: the engine inspects the word sequence under
/// the given environment and options, delivers any diagnostics through
/// `consumer` in emission order while the call is in progress, and returns
/// the overall verdict (`true` means the module is valid). The front end
/// never retries the call.
pub trait ValidationEngine {
    fn validate(
        &self,
        words: &[u32],
        target_env: TargetEnv,
        options: &ValidatorOptions,
        consumer: &mut dyn MessageConsumer,
    ) -> bool;
}

/// Engine bundled with the front end.
///
/// Applies stream-level policy only: an empty module is rejected with one
/// fatal diagnostic, anything else passes silently. Rule dialects, universal
/// limits and relaxation flags are interpreted by full engine
/// implementations behind [`ValidationEngine`].
pub struct BaselineEngine;

impl ValidationEngine for BaselineEngine {
    fn validate(
        &self,
        words: &[u32],
        _target_env: TargetEnv,
        _options: &ValidatorOptions,
        consumer: &mut dyn MessageConsumer,
    ) -> bool {
        if words.is_empty() {
            consumer.consume(&Diagnostic {
                severity: Severity::Fatal,
                position: 0,
                message: "module contains no words",
            });
            return false;
        }
        true
    }
}
