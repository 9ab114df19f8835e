// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse

use std::sync::Arc;

use crate::config::Settings;
use crate::service::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(service: AuthService) -> Self {
        Self {
            auth: Arc::new(service),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AuthService::new(&Settings::default()))
    }
}
