use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::document::{DocumentStatus, DocumentType},
    server::{
        data::document::DocumentRepository,
        error::AppError,
        model::document::{CreateDocumentParam, UpdateDocumentParam},
    },
};

mod create;
mod get_by_user;
mod update;
