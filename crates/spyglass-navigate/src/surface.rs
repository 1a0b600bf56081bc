// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// One lookup strategy against the rendered surface, most specific first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
	/// Element whose declared path attribute equals the path exactly.
	ExactPath(String),
	/// Element matching both the HTTP method and the last path segment.
	MethodAndLastSegment { method: String, segment: String },
	/// Element matching the last path segment only.
	LastSegment(String),
	/// Any element for the HTTP method.
	Method(String),
}

/// Capability interface over the rendered documentation view.
///
/// The resolver only needs these operations; the renderer's internal
/// structure is not part of the contract. `find` returns candidates, not a
/// verdict; acceptance is the resolver's job.
pub trait DocSurface {
	type Handle;

	/// Switch the view to the document at `document_url`.
	fn select(&mut self, document_url: &str);

	/// All rendered elements matching the probe, in display order.
	fn find(&self, probe: &Probe) -> Vec<Self::Handle>;

	/// Rendered text content of an element.
	fn text_of(&self, handle: &Self::Handle) -> String;

	fn is_collapsed(&self, handle: &Self::Handle) -> bool;

	/// Scroll the element into view.
	fn reveal(&mut self, handle: &Self::Handle);

	/// Trigger the element's expand control.
	fn expand(&mut self, handle: &Self::Handle);
}
