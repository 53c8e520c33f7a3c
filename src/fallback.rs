// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

use std::future::Future;

use crate::error::Error;

/// Await a fallible lookup, degrading failure to `None`
///
/// Secondary dashboard data (prices, history, claims, token details) must
/// never take the wallet down with it. Callers pass a short label naming
/// the lookup; the error itself only reaches the logs.
pub async fn best_effort<T, F>(what: &str, fut: F) -> Option<T>
where
    F: Future<Output = Result<T, Error>>,
{
    match fut.await {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(target: "wallet", "{} unavailable: {}", what, err);
            None
        }
    }
}
