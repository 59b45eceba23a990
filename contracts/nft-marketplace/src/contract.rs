use super::*;

/// Initialize the marketplace contract with an empty list of listings.
#[init(contract = "NftMarketplace")]
fn contract_init<S: HasStateApi>(
    _ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    Ok(State::empty(state_builder))
}

/// Create a new listing offering an NFT at a CIS-2 token price.
///
/// The NFT stays with the seller until the listing is bought. No check
/// against the NFT contract happens here; the marketplace only has to be
/// an operator on the NFT contract by the time of the sale.
///
/// Returns the id assigned to the new listing.
///
/// Rejects if:
/// - It fails to parse the parameter.
/// - The sender is a contract address.
/// - The price is zero. In that case no id is consumed.
#[receive(
    contract = "NftMarketplace",
    name = "createListing",
    parameter = "CreateListingParams",
    return_value = "ListingId",
    enable_logger,
    mutable
)]
fn contract_create_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<ListingId> {
    let params: CreateListingParams = ctx.parameter_cursor().get()?;

    let seller = match ctx.sender() {
        Address::Account(address) => address,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    ensure!(
        params.price != TokenAmountU64(0),
        CustomContractError::InvalidPrice.into()
    );

    let price = params.price;
    let listing_id = host.state_mut().create(ListingDetails {
        name: params.name,
        token: params.token,
        payment: params.payment,
        seller,
        price,
        active: true,
    });

    // Event for creating a listing.
    logger.log(&MarketEvent::created(listing_id, seller, price))?;

    Ok(listing_id)
}

/// Buy one of the listed NFTs.
///
/// The listing is consumed before the collaborating contracts are
/// invoked, so a reentrant call already observes it as inactive. A
/// rejection at any step rolls the whole update back: payment and NFT
/// move together or not at all.
///
/// The seller buying the own listing is allowed.
///
/// Rejects if:
/// - It fails to parse the parameter.
/// - The sender is a contract address.
/// - The listing id was never assigned.
/// - The listing was deactivated or already sold.
/// - The payment token contract rejects the buyer to seller transfer.
/// - The NFT contract rejects the seller to buyer transfer.
#[receive(
    contract = "NftMarketplace",
    name = "buyListedNFT",
    parameter = "ListingId",
    enable_logger,
    mutable
)]
fn contract_buy_listed_nft<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let listing_id: ListingId = ctx.parameter_cursor().get()?;

    let buyer = match ctx.sender() {
        Address::Account(address) => address,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    let listing = host.state_mut().settle(listing_id)?;

    // Payment first, then the NFT. Order is not observable from the
    // outside since a rejection undoes both.
    payment::transfer(host, &listing.payment, buyer, listing.seller, listing.price)?;
    nft::transfer(host, &listing.token, listing.seller, buyer)?;

    // Event for buying a listed NFT.
    logger.log(&MarketEvent::bought(listing_id, buyer, listing.price))?;

    Ok(())
}

/// Take a listing off the market.
///
/// The record is kept and stays queryable, only the active flag flips.
///
/// Rejects if:
/// - It fails to parse the parameter.
/// - The listing id was never assigned.
/// - The sender is not the seller of the listing.
/// - The listing is already inactive.
#[receive(
    contract = "NftMarketplace",
    name = "deactivateListing",
    parameter = "ListingId",
    enable_logger,
    mutable
)]
fn contract_deactivate_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let listing_id: ListingId = ctx.parameter_cursor().get()?;

    host.state_mut().deactivate(listing_id, &ctx.sender())?;

    // Event for deactivating a listing.
    logger.log(&MarketEvent::deactivated(listing_id))?;

    Ok(())
}

/// Update the price of an active listing.
///
/// Rejects if:
/// - It fails to parse the parameter.
/// - The listing id was never assigned.
/// - The listing is no longer active.
/// - The sender is not the seller of the listing.
/// - The new price is zero.
#[receive(
    contract = "NftMarketplace",
    name = "updatePrice",
    parameter = "UpdatePriceParams",
    enable_logger,
    mutable
)]
fn contract_update_price<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: UpdatePriceParams = ctx.parameter_cursor().get()?;

    host.state_mut()
        .update_price(params.listing_id, &ctx.sender(), params.price)?;

    // Event for updating the listing price.
    logger.log(&MarketEvent::updated(params.listing_id, params.price))?;

    Ok(())
}

/// Look up a single listing, whether it is still active or not.
///
/// Rejects if:
/// - It fails to parse the parameter.
/// - The listing id was never assigned.
#[receive(
    contract = "NftMarketplace",
    name = "getListing",
    parameter = "ListingId",
    return_value = "ListingDetails"
)]
fn contract_get_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ListingDetails> {
    let listing_id: ListingId = ctx.parameter_cursor().get()?;
    Ok(host.state().get(listing_id)?)
}

/// View the whole marketplace state. Intended for indexers and UIs.
#[receive(contract = "NftMarketplace", name = "view", return_value = "ViewState")]
fn contract_view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewState> {
    let state = host.state();
    Ok(ViewState {
        listings: state.all(),
        next_id: state.next_id,
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const SELLER: AccountAddress = AccountAddress([1u8; 32]);
    const BUYER: AccountAddress = AccountAddress([2u8; 32]);
    const OUTSIDER: AccountAddress = AccountAddress([3u8; 32]);

    const NFT_CONTRACT: ContractAddress = ContractAddress {
        index: 10,
        subindex: 0,
    };
    const PAYMENT_CONTRACT: ContractAddress = ContractAddress {
        index: 20,
        subindex: 0,
    };

    const PRICE: ContractTokenAmount = TokenAmountU64(1_000_000);

    fn token() -> Token {
        Token {
            contract: NFT_CONTRACT,
            id: TokenIdVec(vec![0, 1]),
        }
    }

    fn empty_host() -> TestHost<State<TestStateApi>> {
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder);
        TestHost::new(state, state_builder)
    }

    /// Put a listing by SELLER directly into the state.
    fn with_listing(host: &mut TestHost<State<TestStateApi>>) -> ListingId {
        host.state_mut().create(ListingDetails {
            name: "Test NFT".into(),
            token: token(),
            payment: PAYMENT_CONTRACT,
            seller: SELLER,
            price: PRICE,
            active: true,
        })
    }

    fn mock_transfer_ok(host: &mut TestHost<State<TestStateApi>>, contract: ContractAddress) {
        host.setup_mock_entrypoint(
            contract,
            OwnedEntrypointName::new_unchecked(TRANSFER_ENTRYPOINT.into()),
            MockFn::returning_ok(()),
        );
    }

    fn mock_transfer_err(host: &mut TestHost<State<TestStateApi>>, contract: ContractAddress) {
        host.setup_mock_entrypoint(
            contract,
            OwnedEntrypointName::new_unchecked(TRANSFER_ENTRYPOINT.into()),
            MockFn::returning_err::<()>(CallContractError::LogicReject {
                reason: -1,
                return_value: (),
            }),
        );
    }

    /// Test initialization succeeds.
    #[concordium_test]
    fn test_init() {
        let ctx = TestInitContext::empty();
        let mut state_builder = TestStateBuilder::new();

        let state = contract_init(&ctx, &mut state_builder)
            .expect_report("Contract initialization failed");

        claim_eq!(state.next_id, 0, "No ids should be consumed");
        claim!(
            state.listings.iter().next().is_none(),
            "No listings should be initialized"
        );
    }

    /// Creating a listing stores it as active under the next id and logs
    /// the event.
    #[concordium_test]
    fn test_create_listing() {
        let params = CreateListingParams {
            name: "Test NFT".into(),
            token: token(),
            price: PRICE,
            payment: PAYMENT_CONTRACT,
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        let mut host = empty_host();

        let listing_id = contract_create_listing(&ctx, &mut host, &mut logger)
            .expect_report("Creating a listing failed");

        claim_eq!(listing_id, 0, "First listing should get id 0");
        let listing = host.state().get(listing_id).expect_report("Lookup failed");
        claim!(listing.active, "Fresh listing should be active");
        claim_eq!(listing.price, PRICE);
        claim_eq!(listing.seller, SELLER);
        claim!(
            logger
                .logs
                .contains(&to_bytes(&MarketEvent::created(0, SELLER, PRICE))),
            "Missing ListingCreated event"
        );

        let second = contract_create_listing(&ctx, &mut host, &mut logger)
            .expect_report("Creating a second listing failed");
        claim_eq!(second, 1, "Ids should be assigned in order");
    }

    /// A zero price is rejected and no id is consumed.
    #[concordium_test]
    fn test_create_listing_zero_price() {
        let params = CreateListingParams {
            name: "Test NFT".into(),
            token: token(),
            price: TokenAmountU64(0),
            payment: PAYMENT_CONTRACT,
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        let mut host = empty_host();

        let error = contract_create_listing(&ctx, &mut host, &mut logger)
            .expect_err_report("Zero price should be rejected");
        claim_eq!(error, CustomContractError::InvalidPrice.into());
        claim!(logger.logs.is_empty(), "Rejected call must not log");
        claim_eq!(host.state().next_id, 0, "Failed create must not consume an id");
    }

    /// The full sale: payment buyer to seller, NFT seller to buyer,
    /// listing consumed, event logged.
    #[concordium_test]
    fn test_buy_listed_nft() {
        let mut host = empty_host();
        let listing_id = with_listing(&mut host);
        mock_transfer_ok(&mut host, PAYMENT_CONTRACT);
        mock_transfer_ok(&mut host, NFT_CONTRACT);

        let parameter_bytes = to_bytes(&listing_id);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        contract_buy_listed_nft(&ctx, &mut host, &mut logger).expect_report("Buying failed");

        let listing = host.state().get(listing_id).expect_report("Lookup failed");
        claim!(!listing.active, "Sold listing should be inactive");
        claim!(
            logger
                .logs
                .contains(&to_bytes(&MarketEvent::bought(listing_id, BUYER, PRICE))),
            "Missing ListingBought event"
        );
    }

    /// Buying an id that was never assigned is rejected.
    #[concordium_test]
    fn test_buy_unknown_listing() {
        let mut host = empty_host();

        let parameter_bytes = to_bytes(&0u64);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let error = contract_buy_listed_nft(&ctx, &mut host, &mut logger)
            .expect_err_report("Unknown listing should be rejected");
        claim_eq!(error, CustomContractError::UnknownListing.into());
    }

    /// Only one of two buyers of the same listing succeeds.
    #[concordium_test]
    fn test_buy_twice() {
        let mut host = empty_host();
        let listing_id = with_listing(&mut host);
        mock_transfer_ok(&mut host, PAYMENT_CONTRACT);
        mock_transfer_ok(&mut host, NFT_CONTRACT);

        let parameter_bytes = to_bytes(&listing_id);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        contract_buy_listed_nft(&ctx, &mut host, &mut logger).expect_report("First buy failed");

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OUTSIDER));
        ctx.set_parameter(&parameter_bytes);
        let error = contract_buy_listed_nft(&ctx, &mut host, &mut logger)
            .expect_err_report("Second buy should be rejected");
        claim_eq!(error, CustomContractError::ListingInactive.into());
    }

    /// A failed payment leaves no trace. After the buyer authorizes the
    /// marketplace the retry goes through.
    #[concordium_test]
    fn test_buy_payment_failure_then_retry() {
        let mut host = empty_host();
        let listing_id = with_listing(&mut host);
        mock_transfer_err(&mut host, PAYMENT_CONTRACT);
        mock_transfer_ok(&mut host, NFT_CONTRACT);

        let parameter_bytes = to_bytes(&listing_id);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        // On chain a rejected update is rolled back in full.
        let error = host
            .with_rollback(|host| contract_buy_listed_nft(&ctx, host, &mut logger))
            .expect_err_report("Buy without token approval should be rejected");
        claim_eq!(error, CustomContractError::PaymentFailed.into());
        claim!(logger.logs.is_empty(), "Rejected call must not log");
        let listing = host.state().get(listing_id).expect_report("Lookup failed");
        claim!(listing.active, "Failed buy must leave the listing active");

        // Buyer approves the marketplace on the payment token and retries.
        mock_transfer_ok(&mut host, PAYMENT_CONTRACT);
        contract_buy_listed_nft(&ctx, &mut host, &mut logger).expect_report("Retry failed");
        let listing = host.state().get(listing_id).expect_report("Lookup failed");
        claim!(!listing.active, "Sold listing should be inactive");
        claim!(
            logger
                .logs
                .contains(&to_bytes(&MarketEvent::bought(listing_id, BUYER, PRICE))),
            "Missing ListingBought event"
        );
    }

    /// If the NFT can not be moved after the payment, the whole sale is
    /// rolled back. No payment without the NFT.
    #[concordium_test]
    fn test_buy_nft_transfer_failure() {
        let mut host = empty_host();
        let listing_id = with_listing(&mut host);
        mock_transfer_ok(&mut host, PAYMENT_CONTRACT);
        mock_transfer_err(&mut host, NFT_CONTRACT);

        let parameter_bytes = to_bytes(&listing_id);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let error = host
            .with_rollback(|host| contract_buy_listed_nft(&ctx, host, &mut logger))
            .expect_err_report("Buy without NFT approval should be rejected");
        claim_eq!(error, CustomContractError::TransferFailed.into());
        claim!(logger.logs.is_empty(), "Rejected call must not log");
        let listing = host.state().get(listing_id).expect_report("Lookup failed");
        claim!(listing.active, "Failed buy must leave the listing active");
    }

    /// Nothing keeps a seller from buying the own listing.
    #[concordium_test]
    fn test_buy_own_listing() {
        let mut host = empty_host();
        let listing_id = with_listing(&mut host);
        mock_transfer_ok(&mut host, PAYMENT_CONTRACT);
        mock_transfer_ok(&mut host, NFT_CONTRACT);

        let parameter_bytes = to_bytes(&listing_id);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        contract_buy_listed_nft(&ctx, &mut host, &mut logger)
            .expect_report("Buying the own listing failed");
    }

    /// Deactivation flips the flag, keeps the record and logs the event.
    /// Buying afterwards is rejected.
    #[concordium_test]
    fn test_deactivate_listing() {
        let mut host = empty_host();
        let listing_id = with_listing(&mut host);

        let parameter_bytes = to_bytes(&listing_id);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        contract_deactivate_listing(&ctx, &mut host, &mut logger)
            .expect_report("Deactivation failed");

        let listing = host.state().get(listing_id).expect_report("Lookup failed");
        claim!(!listing.active, "Listing should be inactive");
        claim_eq!(listing.price, PRICE, "Other fields must stay readable");
        claim!(
            logger
                .logs
                .contains(&to_bytes(&MarketEvent::deactivated(listing_id))),
            "Missing ListingDeactivated event"
        );

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER));
        ctx.set_parameter(&parameter_bytes);
        let error = contract_buy_listed_nft(&ctx, &mut host, &mut logger)
            .expect_err_report("Buying a deactivated listing should be rejected");
        claim_eq!(error, CustomContractError::ListingInactive.into());
    }

    /// Only the seller may deactivate.
    #[concordium_test]
    fn test_deactivate_listing_unauthorized() {
        let mut host = empty_host();
        let listing_id = with_listing(&mut host);

        let parameter_bytes = to_bytes(&listing_id);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OUTSIDER));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let error = contract_deactivate_listing(&ctx, &mut host, &mut logger)
            .expect_err_report("Deactivation by a non-seller should be rejected");
        claim_eq!(error, CustomContractError::Unauthorized.into());
        let listing = host.state().get(listing_id).expect_report("Lookup failed");
        claim!(listing.active, "Listing must stay active");
    }

    /// Deactivating twice is rejected.
    #[concordium_test]
    fn test_deactivate_listing_twice() {
        let mut host = empty_host();
        let listing_id = with_listing(&mut host);

        let parameter_bytes = to_bytes(&listing_id);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        contract_deactivate_listing(&ctx, &mut host, &mut logger)
            .expect_report("Deactivation failed");
        let error = contract_deactivate_listing(&ctx, &mut host, &mut logger)
            .expect_err_report("Second deactivation should be rejected");
        claim_eq!(error, CustomContractError::AlreadyInactive.into());
    }

    /// The seller can change the price of an active listing.
    #[concordium_test]
    fn test_update_price() {
        let mut host = empty_host();
        let listing_id = with_listing(&mut host);

        let params = UpdatePriceParams {
            listing_id,
            price: TokenAmountU64(2_000_000),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        contract_update_price(&ctx, &mut host, &mut logger).expect_report("Price update failed");

        let listing = host.state().get(listing_id).expect_report("Lookup failed");
        claim_eq!(listing.price, TokenAmountU64(2_000_000));
        claim!(
            logger.logs.contains(&to_bytes(&MarketEvent::updated(
                listing_id,
                TokenAmountU64(2_000_000)
            ))),
            "Missing ListingUpdated event"
        );
    }

    /// A non-seller may not change the price.
    #[concordium_test]
    fn test_update_price_unauthorized() {
        let mut host = empty_host();
        let listing_id = with_listing(&mut host);

        let params = UpdatePriceParams {
            listing_id,
            price: TokenAmountU64(1),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OUTSIDER));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let error = contract_update_price(&ctx, &mut host, &mut logger)
            .expect_err_report("Price update by a non-seller should be rejected");
        claim_eq!(error, CustomContractError::Unauthorized.into());
        let listing = host.state().get(listing_id).expect_report("Lookup failed");
        claim_eq!(listing.price, PRICE, "Price must stay unchanged");
    }

    /// Updating to zero is rejected.
    #[concordium_test]
    fn test_update_price_to_zero() {
        let mut host = empty_host();
        let listing_id = with_listing(&mut host);

        let params = UpdatePriceParams {
            listing_id,
            price: TokenAmountU64(0),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let error = contract_update_price(&ctx, &mut host, &mut logger)
            .expect_err_report("Zero price should be rejected");
        claim_eq!(error, CustomContractError::InvalidPrice.into());
        let listing = host.state().get(listing_id).expect_report("Lookup failed");
        claim_eq!(listing.price, PRICE, "Price must stay unchanged");
    }

    /// Updating an inactive listing is rejected, even for the seller.
    #[concordium_test]
    fn test_update_price_inactive() {
        let mut host = empty_host();
        let listing_id = with_listing(&mut host);
        host.state_mut()
            .deactivate(listing_id, &Address::Account(SELLER))
            .expect_report("Deactivation failed");

        let params = UpdatePriceParams {
            listing_id,
            price: TokenAmountU64(2),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER));
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let error = contract_update_price(&ctx, &mut host, &mut logger)
            .expect_err_report("Updating an inactive listing should be rejected");
        claim_eq!(error, CustomContractError::ListingInactive.into());
    }

    /// The getListing entrypoint returns the full record, also after
    /// the listing was deactivated.
    #[concordium_test]
    fn test_get_listing() {
        let mut host = empty_host();
        let listing_id = with_listing(&mut host);
        host.state_mut()
            .deactivate(listing_id, &Address::Account(SELLER))
            .expect_report("Deactivation failed");

        let parameter_bytes = to_bytes(&listing_id);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OUTSIDER));
        ctx.set_parameter(&parameter_bytes);

        let listing = contract_get_listing(&ctx, &host).expect_report("Lookup failed");
        claim_eq!(listing.seller, SELLER);
        claim_eq!(listing.price, PRICE);
        claim_eq!(listing.token, token());
        claim_eq!(listing.payment, PAYMENT_CONTRACT);
        claim!(!listing.active, "Deactivated listing must still be returned");
    }

    /// Looking up an id that was never assigned is rejected.
    #[concordium_test]
    fn test_get_listing_unknown() {
        let host = empty_host();

        let parameter_bytes = to_bytes(&7u64);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OUTSIDER));
        ctx.set_parameter(&parameter_bytes);

        let error = contract_get_listing(&ctx, &host)
            .expect_err_report("Unknown listing should be rejected");
        claim_eq!(error, CustomContractError::UnknownListing.into());
    }

    /// The view returns every listing ever created, inactive ones
    /// included.
    #[concordium_test]
    fn test_view() {
        let mut host = empty_host();
        let first = with_listing(&mut host);
        let second = with_listing(&mut host);
        host.state_mut()
            .deactivate(first, &Address::Account(SELLER))
            .expect_report("Deactivation failed");

        let ctx = TestReceiveContext::empty();
        let view = contract_view(&ctx, &host).expect_report("View failed");

        claim_eq!(view.next_id, 2);
        claim_eq!(view.listings.len(), 2);
        claim!(!view.listings[0].1.active, "First listing is deactivated");
        claim_eq!(view.listings[1].0, second);
        claim!(view.listings[1].1.active, "Second listing is still active");
    }
}
