mod formatters;

pub use formatters::{
    format_address, format_number, format_percent, format_price, format_sol, format_time,
};
