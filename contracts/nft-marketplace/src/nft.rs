use super::*;

/// Move the listed NFT from the seller to the buyer.
///
/// The seller must still own the token and must have added the
/// marketplace as operator on the NFT contract. Rejections of any kind
/// surface as TransferFailed.
pub fn transfer<S: HasStateApi>(
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    token: &Token,
    seller: AccountAddress,
    buyer: AccountAddress,
) -> ContractResult<()> {
    let parameter: NftTransferParameter = TransferParams(vec![Transfer {
        token_id: token.id.clone(),
        amount: TokenAmountU8(1),
        from: Address::Account(seller),
        to: Receiver::Account(buyer),
        data: AdditionalData::empty(),
    }]);
    host.invoke_contract(
        &token.contract,
        &parameter,
        EntrypointName::new_unchecked(TRANSFER_ENTRYPOINT),
        Amount::zero(),
    )
    .map_err(|_| CustomContractError::TransferFailed)?;
    Ok(())
}
