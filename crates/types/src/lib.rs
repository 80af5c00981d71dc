pub mod time_delta;
