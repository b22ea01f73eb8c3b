use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::document::DocumentType,
    server::{
        error::AppError,
        model::{document::CreateDocumentParam, user::User},
        service::document::DocumentService,
    },
};

mod access;

fn cover_letter(application_id: Option<String>) -> CreateDocumentParam {
    CreateDocumentParam {
        application_id,
        doc_type: DocumentType::CoverLetter,
        title: "Cover letter".to_string(),
        content: "Dear committee, thank you".to_string(),
        word_count: None,
        version: 1,
        is_generated: false,
        metadata: None,
    }
}
