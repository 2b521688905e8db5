pub mod ip_discoverer;
