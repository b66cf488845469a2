pub mod health;
pub mod product_list;
pub mod tags;
