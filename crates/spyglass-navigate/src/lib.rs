// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Best-effort navigation from an indexed operation to the rendered
//! documentation surface.
//!
//! The renderer is an external, asynchronously-rendering collaborator with
//! no stable element contract, so it is modelled as the [`DocSurface`]
//! capability trait and probed with an ordered ladder of lookup strategies.
//! Every outcome short of finding the element degrades to a logged warning;
//! navigation never fails the application.

pub mod resolver;
pub mod surface;

pub use resolver::{OperationTarget, PendingReveal, Resolver, SETTLE_DELAY};
pub use surface::{DocSurface, Probe};
