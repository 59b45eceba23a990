use super::*;

/// Parameter for the `createListing` function.
#[derive(Debug, Serialize, SchemaType, Clone)]
pub struct CreateListingParams {
    /// Display name of the offer.
    pub name: String,
    /// NFT contract and token id to sell.
    pub token: Token,
    /// Cost in units of the payment token.
    pub price: ContractTokenAmount,
    /// CIS-2 token contract the seller accepts as payment.
    pub payment: ContractAddress,
}

/// Parameter for the `updatePrice` function.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct UpdatePriceParams {
    /// Listing to update.
    pub listing_id: ListingId,
    /// New cost of the NFT.
    pub price: ContractTokenAmount,
}

/// Return parameter of the `view` function.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ViewState {
    /// Every listing ever created, active or not.
    pub listings: Vec<(ListingId, ListingDetails)>,
    /// Id that will be assigned to the next listing.
    pub next_id: ListingId,
}
