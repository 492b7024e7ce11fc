//! REST request and response bodies

pub mod requests;
pub mod responses;

pub use requests::{
    AttachmentDescriptor, AttachmentRef, CreateAttachmentsRequest, CreateChannelRequest,
    CreateGuildRequest, CreateMessageRequest, LoginRequest, RegisterRequest,
    RenameChannelRequest,
};
pub use responses::{AttachmentUploadTicket, LoginResponse, NodeInfo};
