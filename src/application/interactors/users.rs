use std::sync::Arc;

use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::auth::AuthenticatedDTO;
use crate::application::dto::id::IdDTO;
use crate::application::dto::user::{CreateUserDTO, ProfileDTO, UpdateProfileDTO};
use crate::application::interface::crypto::SessionSigner;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::session::Session;
use crate::domain::entities::user::{NewUser, User};

#[derive(Clone)]
pub struct CreateUserInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    user_writer: Arc<dyn UserWriter>,
    signer: Arc<dyn SessionSigner>,
}

impl CreateUserInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        user_writer: Arc<dyn UserWriter>,
        signer: Arc<dyn SessionSigner>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            user_writer,
            signer,
        }
    }

    pub async fn execute(&self, dto: CreateUserDTO) -> AppResult<AuthenticatedDTO> {
        let user = NewUser::new(dto.fio, dto.phone, dto.email, dto.card_number, dto.dob, dto.gender)?;
        if self.user_reader.is_phone_taken(&user.phone).await? {
            warn!("Registration attempt with taken phone: {}", user.phone);
            return Err(AppError::PhoneAlreadyRegistered);
        }
        let user_id = self.user_writer.insert(user.clone()).await?;
        self.db_session.commit().await?;
        let session_token = self.signer.sign(&Session::new(user_id.clone()))?;
        info!("New user registered: {} ({})", user.fio, user.phone);
        Ok(AuthenticatedDTO {
            user_id: user_id.value,
            session_token,
        })
    }
}

#[derive(Clone)]
pub struct GetProfileInteractor {
    user_reader: Arc<dyn UserReader>,
}

impl GetProfileInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>) -> Self {
        Self { user_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = Id::new(dto.id);
        let user = self.user_reader.find_by_id(&user_id).await?.ok_or_else(|| {
            warn!("Session references missing user {}", user_id);
            AppError::UserNotFound
        })?;
        Ok(user.into())
    }
}

#[derive(Clone)]
pub struct UpdateProfileInteractor {
    db_session: Arc<dyn DBSession>,
    user_writer: Arc<dyn UserWriter>,
}

impl UpdateProfileInteractor {
    pub fn new(db_session: Arc<dyn DBSession>, user_writer: Arc<dyn UserWriter>) -> Self {
        Self {
            db_session,
            user_writer,
        }
    }

    pub async fn execute(&self, dto: UpdateProfileDTO) -> AppResult<ProfileDTO> {
        if dto.patch.is_empty() {
            return Err(AppError::NothingToUpdate);
        }
        let user_id: Id<User> = Id::new(dto.id);
        let user = self
            .user_writer
            .update(&user_id, dto.patch)
            .await?
            .ok_or(AppError::UserNotFound)?;
        self.db_session.commit().await?;
        info!("Profile of user {} updated", user_id);
        Ok(user.into())
    }
}
