//! Failures surfaced by pulls and terminal operations.
//!
//! Every fallible operation on a [`Seq`](crate::Seq) returns a [`SeqError`].
//! Public entry points wrap the underlying cause in [`SeqError::Op`] so the
//! message names the operation that failed:
//!
//! ```text
//! Seq<T>::sum() ~ unable to convert this value to a number
//! ```
//!
//! Use [`SeqError::root`] to match on the cause regardless of how many
//! operations it passed through.

use thiserror::Error;

/// A value could not be coerced across the conversion boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The value is not sequence-like.
    #[error("unable to convert this value to a sequence")]
    Sequence,
    /// The value has no numeric representation.
    #[error("unable to convert this value to a number")]
    Number,
}

/// Errors raised by sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// The handle released its producer to a derived sequence or terminal
    /// operation and can no longer be pulled.
    #[error("this sequence has been consumed and cannot be used")]
    Consumed,

    /// A count argument is outside the accepted range.
    #[error("`{name}` is not a positive integer")]
    InvalidCount {
        /// Parameter name as it appears in the operation signature.
        name: &'static str,
    },

    /// An element could not be converted to a number.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// An element handed to `flatten` is not itself a sequence.
    #[error("unable to flatten this value")]
    Flatten(#[source] ConversionError),

    /// Context added at the public surface.
    #[error("Seq<T>::{op}({params}) ~ {source}")]
    Op {
        /// Name of the failing operation.
        op: &'static str,
        /// Its parameter list, as shown in the message.
        params: &'static str,
        /// The underlying failure.
        source: Box<SeqError>,
    },
}

impl SeqError {
    /// The innermost error, stripped of operation context.
    ///
    /// ```rust
    /// use pullseq::SeqError;
    ///
    /// let err = SeqError::Consumed.within("collect", "");
    /// assert_eq!(err.to_string(), "Seq<T>::collect() ~ this sequence has been consumed and cannot be used");
    /// assert_eq!(err.root(), &SeqError::Consumed);
    /// ```
    pub fn root(&self) -> &SeqError {
        let mut err = self;
        while let SeqError::Op { source, .. } = err {
            err = source;
        }
        err
    }

    /// Returns `true` if the root cause is a reuse violation.
    pub fn is_consumed(&self) -> bool {
        matches!(self.root(), SeqError::Consumed)
    }

    /// Wrap this error with the name and parameter list of the operation it
    /// escaped from.
    pub fn within(self, op: &'static str, params: &'static str) -> Self {
        SeqError::Op {
            op,
            params,
            source: Box::new(self),
        }
    }
}

/// Run `f`, attaching `op(params)` to any error it returns.
pub(crate) fn namespaced<R>(
    op: &'static str,
    params: &'static str,
    f: impl FnOnce() -> Result<R, SeqError>,
) -> Result<R, SeqError> {
    f().map_err(|e| e.within(op, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_strips_nested_context() {
        let err = SeqError::Flatten(ConversionError::Sequence)
            .within("next", "")
            .within("collect", "");

        assert_eq!(err.root(), &SeqError::Flatten(ConversionError::Sequence));
        assert!(!err.is_consumed());
    }

    #[test]
    fn test_display_prefixes_operation() {
        let err = SeqError::from(ConversionError::Number).within("product", "");
        assert_eq!(
            err.to_string(),
            "Seq<T>::product() ~ unable to convert this value to a number"
        );

        let err = SeqError::InvalidCount { name: "step" }.within("step_by", "step");
        assert_eq!(
            err.to_string(),
            "Seq<T>::step_by(step) ~ `step` is not a positive integer"
        );
    }

    #[test]
    fn test_namespaced_passes_ok_through() {
        assert_eq!(namespaced("count", "", || Ok::<_, SeqError>(3)), Ok(3));
        assert!(namespaced("count", "", || Err::<(), _>(SeqError::Consumed))
            .unwrap_err()
            .is_consumed());
    }
}
