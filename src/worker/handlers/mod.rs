pub mod buy;
pub mod sell;
pub mod update_price;
