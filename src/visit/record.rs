//! Visitors that publish traversal results into caller-supplied labels.

use std::convert::Infallible;

use crate::{
    core::{clamp::clamped_add, id::IdType, GraphBase, Weight},
    label::PropertyMap,
};

use super::{EdgeEvent, Visitor};

/// Records the accumulated distance from the traversal root into a label.
///
/// Every vertex is initialized to [`Weight::inf`], roots to [`Weight::zero`]
/// and every tree edge accumulates `step` (clamped) onto the source's
/// distance. With unit step and BFS, the recorded distances are exact hop
/// counts.
pub struct DistanceRecorder<'a, M, W> {
    dist: &'a mut M,
    step: W,
}

impl<'a, M, W: Weight> DistanceRecorder<'a, M, W> {
    pub fn new(dist: &'a mut M, step: W) -> Self {
        Self { dist, step }
    }
}

impl<'a, G, M, W> Visitor<G> for DistanceRecorder<'a, M, W>
where
    G: GraphBase,
    M: PropertyMap<G::VertexId, Value = W>,
    W: Weight,
{
    type Interrupt = Infallible;

    fn initialized_vertex(
        &mut self,
        _graph: &G,
        vertex: &G::VertexId,
    ) -> Result<(), Self::Interrupt> {
        *self.dist.get_mut(vertex) = W::inf();
        Ok(())
    }

    fn root_vertex(&mut self, _graph: &G, vertex: &G::VertexId) -> Result<(), Self::Interrupt> {
        *self.dist.get_mut(vertex) = W::zero();
        Ok(())
    }

    fn tree_edge(&mut self, _graph: &G, event: &EdgeEvent<G>) -> Result<(), Self::Interrupt> {
        let next = clamped_add(self.dist.get(&event.from), &self.step);
        *self.dist.get_mut(&event.to) = next;
        Ok(())
    }
}

/// Records the traversal-tree parent of every discovered vertex into a label.
///
/// Every vertex is initialized to the sentinel handle; roots keep it.
pub struct PredecessorRecorder<'a, M> {
    pred: &'a mut M,
}

impl<'a, M> PredecessorRecorder<'a, M> {
    pub fn new(pred: &'a mut M) -> Self {
        Self { pred }
    }
}

impl<'a, G, M> Visitor<G> for PredecessorRecorder<'a, M>
where
    G: GraphBase,
    M: PropertyMap<G::VertexId, Value = G::VertexId>,
{
    type Interrupt = Infallible;

    fn initialized_vertex(
        &mut self,
        _graph: &G,
        vertex: &G::VertexId,
    ) -> Result<(), Self::Interrupt> {
        *self.pred.get_mut(vertex) = G::VertexId::sentinel();
        Ok(())
    }

    fn tree_edge(&mut self, _graph: &G, event: &EdgeEvent<G>) -> Result<(), Self::Interrupt> {
        *self.pred.get_mut(&event.to) = event.from.clone();
        Ok(())
    }
}
