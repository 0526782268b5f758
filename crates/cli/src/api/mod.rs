// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! REST access to the poll service.

mod client;
mod route;
#[cfg(test)]
pub(crate) mod testing;

pub use client::{ApiError, ApiFuture, ApiResult, DeleteConfirmation, HttpPollApi, PollApi};
pub use route::Route;
