//! Handlers for constructs that span several lines. Each module adds its
//! handler to [`RenderContext`](super::RenderContext).

mod block_quote;
mod code_fence;
mod list;
mod plugin;
mod table;
