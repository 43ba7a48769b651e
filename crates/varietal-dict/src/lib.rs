//! Static dictionaries and network helpers for varietal.
//!
//! Every dictionary is exposed through the generator protocol: `list` hands
//! out constant generators, `element` a random pick per call.

pub mod dictionary;
pub mod network;
pub mod words;

pub use dictionary::{
    Dictionary, RandomLorem, common_domains, domains, lorem, lorem_ipsum, names, passwords,
    surnames,
};
pub use network::{MAX_IP_RANGE, RandomNetwork, ip_range, parse_ip};
