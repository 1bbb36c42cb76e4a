pub mod datafeed;
