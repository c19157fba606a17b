// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error and response types shared by the pallet endpoints.

use crate::chain::ChainError;
use crate::utils::BlockIdParseError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when handling pallet requests.
#[derive(Debug, Error)]
pub enum PalletError {
    /// The block parameter could not be parsed.
    #[error("Invalid block parameter: {0}")]
    InvalidBlockParam(#[from] BlockIdParseError),

    /// The path id is not a valid asset id.
    #[error("Invalid asset ID: {0}")]
    InvalidAssetId(String),

    /// The runtime at the requested block does not include the pallet.
    #[error("Pallet not found: {0}")]
    PalletNotFound(String),

    #[error(transparent)]
    Chain(#[from] ChainError),
}

impl IntoResponse for PalletError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            Self::InvalidBlockParam(_) | Self::InvalidAssetId(_) => StatusCode::BAD_REQUEST,
            Self::PalletNotFound(_) | Self::Chain(ChainError::BlockNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            Self::Chain(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Block reference information in responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AtResponse {
    /// The block hash.
    pub hash: String,

    /// The block height (number).
    pub height: String,
}
