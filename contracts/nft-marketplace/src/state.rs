use super::*;

/// A single sell offer recorded by the marketplace.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct ListingDetails {
    /// Descriptive label of the offer. Not required to be unique.
    pub name: String,
    /// NFT contract and token id being offered.
    pub token: Token,
    /// CIS-2 token contract accepted as payment.
    pub payment: ContractAddress,
    /// Account that created the listing. The only authority for price
    /// updates and deactivation.
    pub seller: AccountAddress,
    /// Cost in units of the payment token. Above zero while the listing
    /// is active.
    pub price: ContractTokenAmount,
    /// Whether the listing can still be bought or modified. Flips to
    /// false exactly once, on deactivation or on a sale.
    pub active: bool,
}

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Every listing ever created, keyed by id. Inactive listings are
    /// kept around for history queries.
    pub listings: StateMap<ListingId, ListingDetails, S>,
    /// Id assigned to the next listing. Ids are never reused.
    pub next_id: ListingId,
}

// Functions for creating and updating the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates a new state with no listings.
    pub fn empty(state_builder: &mut StateBuilder<S>) -> Self {
        State {
            listings: state_builder.new_map(),
            next_id: 0,
        }
    }

    /// Record a new listing and assign it the next free id.
    pub fn create(&mut self, listing: ListingDetails) -> ListingId {
        let listing_id = self.next_id;
        self.next_id += 1;
        let _ = self.listings.insert(listing_id, listing);
        listing_id
    }

    /// Consume an active listing for a sale and return a snapshot of it.
    /// Fails with UnknownListing if the id was never assigned and with
    /// ListingInactive if the listing was deactivated or sold before.
    pub fn settle(&mut self, listing_id: ListingId) -> Result<ListingDetails, CustomContractError> {
        let mut listing = self
            .listings
            .get_mut(&listing_id)
            .ok_or(CustomContractError::UnknownListing)?;
        ensure!(listing.active, CustomContractError::ListingInactive);
        listing.active = false;
        Ok(listing.clone())
    }

    /// Deactivate a listing on behalf of its seller. The record stays
    /// queryable, only the active flag flips.
    pub fn deactivate(
        &mut self,
        listing_id: ListingId,
        sender: &Address,
    ) -> Result<(), CustomContractError> {
        let mut listing = self
            .listings
            .get_mut(&listing_id)
            .ok_or(CustomContractError::UnknownListing)?;
        // Ensuring only the seller can take the listing down.
        ensure!(
            sender.matches_account(&listing.seller),
            CustomContractError::Unauthorized
        );
        ensure!(listing.active, CustomContractError::AlreadyInactive);
        listing.active = false;
        Ok(())
    }

    /// Update the price of an active listing on behalf of its seller.
    pub fn update_price(
        &mut self,
        listing_id: ListingId,
        sender: &Address,
        price: ContractTokenAmount,
    ) -> Result<(), CustomContractError> {
        let mut listing = self
            .listings
            .get_mut(&listing_id)
            .ok_or(CustomContractError::UnknownListing)?;
        ensure!(listing.active, CustomContractError::ListingInactive);
        // Ensuring only the seller can alter the price.
        ensure!(
            sender.matches_account(&listing.seller),
            CustomContractError::Unauthorized
        );
        ensure!(
            price != TokenAmountU64(0),
            CustomContractError::InvalidPrice
        );
        listing.price = price;
        Ok(())
    }

    /// Look up a listing, active or not.
    pub fn get(&self, listing_id: ListingId) -> Result<ListingDetails, CustomContractError> {
        self.listings
            .get(&listing_id)
            .map(|listing| listing.clone())
            .ok_or(CustomContractError::UnknownListing)
    }

    /// Snapshot of every listing ever created.
    pub fn all(&self) -> Vec<(ListingId, ListingDetails)> {
        self.listings
            .iter()
            .map(|(listing_id, listing)| (*listing_id, listing.clone()))
            .collect()
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const SELLER: AccountAddress = AccountAddress([7u8; 32]);

    fn listing() -> ListingDetails {
        ListingDetails {
            name: "Test NFT".into(),
            token: Token {
                contract: ContractAddress {
                    index: 10,
                    subindex: 0,
                },
                id: TokenIdVec(vec![1]),
            },
            payment: ContractAddress {
                index: 20,
                subindex: 0,
            },
            seller: SELLER,
            price: TokenAmountU64(100),
            active: true,
        }
    }

    /// Ids are assigned in order and never reused.
    #[concordium_test]
    fn test_ids_are_monotone() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder);

        claim_eq!(state.create(listing()), 0);
        claim_eq!(state.create(listing()), 1);
        state
            .deactivate(0, &Address::Account(SELLER))
            .expect_report("Deactivation failed");
        claim_eq!(state.create(listing()), 2);
    }

    /// A settled listing is terminal: it can neither be settled again
    /// nor deactivated.
    #[concordium_test]
    fn test_settled_listing_is_terminal() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder);
        let listing_id = state.create(listing());

        let sold = state.settle(listing_id).expect_report("Settling failed");
        claim!(!sold.active);

        claim_eq!(
            state.settle(listing_id),
            Err(CustomContractError::ListingInactive)
        );
        claim_eq!(
            state.deactivate(listing_id, &Address::Account(SELLER)),
            Err(CustomContractError::AlreadyInactive)
        );
    }

    /// A deactivated listing can not be settled.
    #[concordium_test]
    fn test_deactivated_listing_is_terminal() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder);
        let listing_id = state.create(listing());

        state
            .deactivate(listing_id, &Address::Account(SELLER))
            .expect_report("Deactivation failed");

        claim_eq!(
            state.settle(listing_id),
            Err(CustomContractError::ListingInactive)
        );
        let kept = state.get(listing_id).expect_report("Lookup failed");
        claim!(!kept.active);
        claim_eq!(kept.price, TokenAmountU64(100));
    }
}
