//! Built-in heuristics.

use autopick_protocols::Document;

use super::PredictionContext;

/// One generalization rule.
pub trait Heuristic<D: Document>: Send + Sync {
    /// Short identifier used in logs and [`Prediction`](super::Prediction).
    fn name(&self) -> &'static str;

    /// New candidates for the context's selection. Empty means "no opinion",
    /// and the chain moves on.
    fn predict(&self, ctx: &PredictionContext<'_, D>) -> Vec<D::Node>;
}

/// Matches every node carrying all class tokens the selection shares.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedClassHeuristic;

impl<D: Document> Heuristic<D> for SharedClassHeuristic {
    fn name(&self) -> &'static str {
        "shared_class"
    }

    fn predict(&self, ctx: &PredictionContext<'_, D>) -> Vec<D::Node> {
        let classes = ctx.shared_classes();
        if classes.is_empty() {
            return Vec::new();
        }
        ctx.candidates(ctx.document.query_classes(&classes))
    }
}

/// Matches every node with the selection's tag name, provided the
/// selection has exactly one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedTagHeuristic;

impl<D: Document> Heuristic<D> for SharedTagHeuristic {
    fn name(&self) -> &'static str {
        "shared_tag"
    }

    fn predict(&self, ctx: &PredictionContext<'_, D>) -> Vec<D::Node> {
        let tags = ctx.tag_names();
        let [tag] = tags.as_slice() else {
            return Vec::new();
        };
        ctx.candidates(ctx.document.query_tag(tag))
    }
}
