//! # API Handlers
//!
//! The flow between HTTP requests and the service layer. Handlers stay
//! thin: extract, call one service, wrap the result in its response
//! envelope. Anything fallible bubbles up as [`ApiError`] and renders
//! through the shared mapping.

use axum::extract::{Path, State};
use axum::Json;
use domains::DomainError;
use serde_json::{json, Value};
use services::{AuthService, ChatService, LikeService, PostService};

use crate::dto::{
    ConversationView, CreatePostRequest, FeedQuery, InboxQuery, LikeRequest, LoginRequest,
    OpenConversationRequest, PostView, SendMessageRequest, SignupRequest,
};
use crate::error::{ApiError, ApiResult};
use crate::extract::{AppJson, AppQuery};

/// State shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub posts: PostService,
    pub likes: LikeService,
    pub chat: ChatService,
}

// ---- Auth ----

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> ApiResult<Json<Value>> {
    let user = state.auth.login(&request.email, &request.password).await?;
    Ok(Json(json!({ "user": user })))
}

/// `POST /api/auth/signup`
pub async fn signup(
    State(state): State<AppState>,
    AppJson(request): AppJson<SignupRequest>,
) -> ApiResult<Json<Value>> {
    let user = state
        .auth
        .signup(&request.email, &request.password, &request.name)
        .await?;
    Ok(Json(json!({ "user": user })))
}

// ---- Posts ----

/// `GET /api/posts[?authorId=…]`
pub async fn list_posts(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<FeedQuery>,
) -> ApiResult<Json<Value>> {
    let feed = state.posts.browse(query.author_id.as_deref()).await?;
    let posts: Vec<PostView> = feed.into_iter().map(PostView::from).collect();
    Ok(Json(json!({ "posts": posts })))
}

/// `POST /api/posts`
pub async fn create_post(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreatePostRequest>,
) -> ApiResult<Json<Value>> {
    let authored = state.posts.create(request.into()).await?;
    Ok(Json(json!({ "post": PostView::from(authored) })))
}

// ---- Likes ----

/// `POST /api/posts/{id}/like`
pub async fn like_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    AppJson(request): AppJson<LikeRequest>,
) -> ApiResult<Json<Value>> {
    let post = state.likes.like(&post_id, &request.user_id).await?;
    Ok(Json(json!({ "post": post })))
}

/// `DELETE /api/posts/{id}/like`
pub async fn unlike_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    AppJson(request): AppJson<LikeRequest>,
) -> ApiResult<Json<Value>> {
    let post = state.likes.unlike(&post_id, &request.user_id).await?;
    Ok(Json(json!({ "post": post })))
}

// ---- Conversations ----

/// `GET /api/conversations?userId=…`
pub async fn list_conversations(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<InboxQuery>,
) -> ApiResult<Json<Value>> {
    let Some(user_id) = query.user_id else {
        return Err(ApiError(DomainError::Validation("userId required".into())));
    };
    let inbox = state.chat.conversations_for(&user_id).await?;
    let conversations: Vec<ConversationView> =
        inbox.into_iter().map(ConversationView::from).collect();
    Ok(Json(json!({ "conversations": conversations })))
}

/// `POST /api/conversations`
pub async fn open_conversation(
    State(state): State<AppState>,
    AppJson(request): AppJson<OpenConversationRequest>,
) -> ApiResult<Json<Value>> {
    let conversation = state
        .chat
        .open_conversation(
            &request.user_id1,
            &request.user_id2,
            &request.post_id,
            &request.post_title,
        )
        .await?;
    Ok(Json(json!({ "conversation": conversation })))
}

// ---- Messages ----

/// `GET /api/conversations/{id}/messages`
pub async fn list_messages(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let messages = state.chat.messages(&conversation_id).await?;
    Ok(Json(json!({ "messages": messages })))
}

/// `POST /api/conversations/{id}/messages`
pub async fn send_message(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    AppJson(request): AppJson<SendMessageRequest>,
) -> ApiResult<Json<Value>> {
    let message = state
        .chat
        .send_message(&conversation_id, &request.sender_id, &request.text)
        .await?;
    Ok(Json(json!({ "message": message })))
}
