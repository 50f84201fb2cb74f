//! User gRPC service implementation.

use crate::proto::{common, user};
use shop_core::{PageRequest, ShopError, UserId};
use shop_service::dto::{CreateUserRequest, UpdateUserRequest, UserInfo};
use shop_service::UserService;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::{debug, error, warn};

/// User gRPC service implementation.
pub struct UserGrpcService {
    user_service: Arc<dyn UserService>,
}

impl UserGrpcService {
    /// Creates a new user gRPC service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}

#[tonic::async_trait]
impl user::user_server::User for UserGrpcService {
    async fn get_user_list(
        &self,
        request: Request<user::PageInfo>,
    ) -> Result<Response<user::UserListResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC GetUserList: pn={} p_size={}", req.pn, req.p_size);

        let response = self
            .user_service
            .list_users(PageRequest::new(req.pn, req.p_size))
            .await
            .map_err(to_status)?;

        Ok(Response::new(user::UserListResponse {
            total: i32::try_from(response.total).unwrap_or(i32::MAX),
            data: response.data.into_iter().map(to_proto_user).collect(),
        }))
    }

    async fn get_user_by_mobile(
        &self,
        request: Request<user::MobileRequest>,
    ) -> Result<Response<user::UserInfoResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC GetUserByMobile: {}", req.mobile);

        let response = self
            .user_service
            .get_user_by_mobile(&req.mobile)
            .await
            .map_err(to_status)?;

        Ok(Response::new(to_proto_user(response)))
    }

    async fn get_user_by_id(
        &self,
        request: Request<user::IdRequest>,
    ) -> Result<Response<user::UserInfoResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC GetUserById: {}", req.id);

        let response = self
            .user_service
            .get_user_by_id(UserId::new(req.id))
            .await
            .map_err(to_status)?;

        Ok(Response::new(to_proto_user(response)))
    }

    async fn create_user(
        &self,
        request: Request<user::CreateUserInfo>,
    ) -> Result<Response<user::UserInfoResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC CreateUser: {}", req.mobile);

        let create_request = CreateUserRequest {
            mobile: req.mobile,
            password: req.pass_word,
            nick_name: req.nick_name,
        };

        let response = self
            .user_service
            .create_user(create_request)
            .await
            .map_err(to_status)?;

        Ok(Response::new(to_proto_user(response)))
    }

    async fn update_user(
        &self,
        request: Request<user::UpdateUserInfo>,
    ) -> Result<Response<common::Empty>, Status> {
        let req = request.into_inner();
        debug!("gRPC UpdateUser: {}", req.id);

        let update_request = UpdateUserRequest {
            nick_name: req.nick_name,
            gender: req.gender,
            birthday: req.birthday,
        };

        self.user_service
            .update_user(UserId::new(req.id), update_request)
            .await
            .map_err(to_status)?;

        Ok(Response::new(common::Empty {}))
    }

    async fn check_pass_word(
        &self,
        request: Request<user::PasswordCheckInfo>,
    ) -> Result<Response<user::CheckResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC CheckPassWord");

        let success = self
            .user_service
            .check_password(&req.password, &req.encrypted_password)
            .await
            .map_err(to_status)?;

        Ok(Response::new(user::CheckResponse { success }))
    }
}

// Helper functions

fn to_status(err: ShopError) -> Status {
    if err.is_internal() {
        error!("gRPC error: {:?}", err);
    } else {
        warn!("gRPC request rejected: {}", err);
    }

    match err {
        ShopError::NotFound { .. } => Status::not_found(err.to_string()),
        ShopError::AlreadyExists(msg) => Status::already_exists(msg),
        ShopError::Validation(msg) => Status::invalid_argument(msg),
        _ => Status::internal(err.to_string()),
    }
}

fn to_proto_user(user: UserInfo) -> user::UserInfoResponse {
    user::UserInfoResponse {
        id: user.id,
        password: user.password,
        mobile: user.mobile,
        nick_name: user.nick_name,
        birthday: user.birthday,
        gender: user.gender,
        role: user.role,
    }
}
