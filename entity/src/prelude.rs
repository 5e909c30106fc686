pub use super::build::Entity as Build;
pub use super::build_material::Entity as BuildMaterial;
pub use super::category::Entity as Category;
pub use super::company::Entity as Company;
pub use super::furniture_model::Entity as FurnitureModel;
pub use super::furniture_tag::Entity as FurnitureTag;
pub use super::material::Entity as Material;
pub use super::tag::Entity as Tag;
pub use super::tag_material::Entity as TagMaterial;
