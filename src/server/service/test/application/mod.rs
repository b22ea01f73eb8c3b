use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{application::ApplicationStatus, user::UserRole},
    server::{
        error::AppError,
        gateway::{event, hub::NotificationHub},
        model::{application::UpdateApplicationParam, user::User},
        service::application::ApplicationService,
    },
};

mod access;
