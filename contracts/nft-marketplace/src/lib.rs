//! It exposes a function for listing NFTs at a CIS-2 token price and a
//! function for buying one of the listed NFTs.
#![cfg_attr(not(feature = "std"), no_std)]
use crate::{events::*, external::*, state::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod contract;
mod events;
mod external;
mod nft;
mod payment;
mod state;
