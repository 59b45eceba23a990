use super::*;

/// An untagged event of a new listing being created.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct CreatedEvent {
    /// Id assigned to the new listing.
    pub listing_id: ListingId,
    /// The account offering the NFT for sale.
    pub seller: AccountAddress,
    /// Cost in units of the payment token.
    pub price: ContractTokenAmount,
}

/// An untagged event of a listing being bought.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct BoughtEvent {
    /// Id of the bought listing.
    pub listing_id: ListingId,
    /// The account that paid for and now owns the NFT.
    pub buyer: AccountAddress,
    /// The price that was paid.
    pub price: ContractTokenAmount,
}

/// An untagged event of a listing being deactivated by its seller.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct DeactivatedEvent {
    /// Id of the deactivated listing.
    pub listing_id: ListingId,
}

/// An untagged event of a listing price change.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct UpdatedEvent {
    /// Id of the updated listing.
    pub listing_id: ListingId,
    /// The new cost of the NFT.
    pub price: ContractTokenAmount,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum MarketEvent {
    /// Creating a listing
    Created(CreatedEvent),
    /// Buying a listed NFT
    Bought(BoughtEvent),
    /// Deactivating a listing
    Deactivated(DeactivatedEvent),
    /// Updating a listing price
    Updated(UpdatedEvent),
}

impl MarketEvent {
    pub fn created(listing_id: ListingId, seller: AccountAddress, price: ContractTokenAmount) -> Self {
        Self::Created(CreatedEvent {
            listing_id,
            seller,
            price,
        })
    }

    pub fn bought(listing_id: ListingId, buyer: AccountAddress, price: ContractTokenAmount) -> Self {
        Self::Bought(BoughtEvent {
            listing_id,
            buyer,
            price,
        })
    }

    pub fn deactivated(listing_id: ListingId) -> Self {
        Self::Deactivated(DeactivatedEvent { listing_id })
    }

    pub fn updated(listing_id: ListingId, price: ContractTokenAmount) -> Self {
        Self::Updated(UpdatedEvent { listing_id, price })
    }
}

impl Serial for MarketEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            MarketEvent::Created(event) => {
                out.write_u8(LISTING_CREATED_TAG)?;
                event.serial(out)
            }
            MarketEvent::Bought(event) => {
                out.write_u8(LISTING_BOUGHT_TAG)?;
                event.serial(out)
            }
            MarketEvent::Deactivated(event) => {
                out.write_u8(LISTING_DEACTIVATED_TAG)?;
                event.serial(out)
            }
            MarketEvent::Updated(event) => {
                out.write_u8(LISTING_UPDATED_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for MarketEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            LISTING_CREATED_TAG => CreatedEvent::deserial(source).map(MarketEvent::Created),
            LISTING_BOUGHT_TAG => BoughtEvent::deserial(source).map(MarketEvent::Bought),
            LISTING_DEACTIVATED_TAG => {
                DeactivatedEvent::deserial(source).map(MarketEvent::Deactivated)
            }
            LISTING_UPDATED_TAG => UpdatedEvent::deserial(source).map(MarketEvent::Updated),
            _ => Err(ParseError::default()),
        }
    }
}
