pub mod category;
pub mod comment;
pub mod document;
pub mod gallery;
pub mod member;
pub mod post;

pub mod prelude {
    pub use crate::category::Category as CategoryEntity;
    pub use crate::comment::Comment as CommentEntity;
    pub use crate::document::Document as DocumentEntity;
    pub use crate::gallery::Gallery as GalleryEntity;
    pub use crate::member::Member as MemberEntity;
    pub use crate::post::Post as PostEntity;
}
