mod requests;
mod responses;

pub use requests::{AddFavoriteRequest, FavoriteInput, GeneratePostsRequest, UpdateSettingsRequest};
pub use responses::{ExportResponse, GeneratePostsResponse};
