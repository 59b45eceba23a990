/// Tag for the Custom Listing Created event.
pub const LISTING_CREATED_TAG: u8 = u8::MAX - 5;

/// Tag for the Custom Listing Bought event.
pub const LISTING_BOUGHT_TAG: u8 = u8::MAX - 6;

/// Tag for the Custom Listing Deactivated event.
pub const LISTING_DEACTIVATED_TAG: u8 = u8::MAX - 7;

/// Tag for the Custom Listing Updated event.
pub const LISTING_UPDATED_TAG: u8 = u8::MAX - 8;

/// Name of the CIS-2 transfer entrypoint invoked on both collaborating
/// token contracts.
pub const TRANSFER_ENTRYPOINT: &str = "transfer";
