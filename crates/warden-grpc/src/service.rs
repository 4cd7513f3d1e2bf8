//! The gRPC user service.

use crate::caller::CallerExt;
use crate::proto;
use crate::proto::user_service_server::UserService;
use tonic::{Request, Response, Status};
use warden_directory::{AccountService, AccountsError};

/// gRPC surface over the shared account service.
///
/// Runs behind [`crate::AuthInterceptor`], so every call arrives with an
/// identity already attached (or was rejected before reaching here).
pub struct UserGrpcService {
    accounts: AccountService,
}

impl UserGrpcService {
    pub fn new(accounts: AccountService) -> Self {
        Self { accounts }
    }
}

fn to_proto(user: warden_core::User) -> proto::User {
    proto::User {
        id: user.id,
        name: user.name,
        email: user.email,
        created_at: user.created_at.to_rfc3339(),
    }
}

fn status_for_accounts(err: AccountsError) -> Status {
    match err {
        AccountsError::NotFound => Status::not_found("user not found"),
        AccountsError::EmailTaken => Status::already_exists("email already registered"),
        AccountsError::InvalidCredentials => Status::unauthenticated("invalid credentials"),
        other => {
            tracing::error!(error = %other, "account operation failed");
            Status::internal("internal error")
        }
    }
}

#[tonic::async_trait]
impl UserService for UserGrpcService {
    async fn create_user(
        &self,
        request: Request<proto::CreateUserRequest>,
    ) -> Result<Response<proto::CreateUserResponse>, Status> {
        let req = request.into_inner();
        if req.name.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
            return Err(Status::invalid_argument(
                "name, email and password are required",
            ));
        }

        let user = self
            .accounts
            .register(&req.name, &req.email, &req.password)
            .await
            .map_err(status_for_accounts)?;

        Ok(Response::new(proto::CreateUserResponse {
            user: Some(to_proto(user)),
        }))
    }

    async fn get_user(
        &self,
        request: Request<proto::GetUserRequest>,
    ) -> Result<Response<proto::GetUserResponse>, Status> {
        let caller = request.caller()?.clone();
        let req = request.into_inner();

        warden_auth::authorize_self_access(&caller, &req.id)
            .map_err(|e| crate::interceptor::status_for(&e))?;

        let user = self
            .accounts
            .get_user(&req.id)
            .await
            .map_err(status_for_accounts)?;

        Ok(Response::new(proto::GetUserResponse {
            user: Some(to_proto(user)),
        }))
    }
}
