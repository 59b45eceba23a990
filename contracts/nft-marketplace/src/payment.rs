use super::*;

/// Move `amount` units of the payment token from the buyer to the
/// seller.
///
/// The buyer must have added the marketplace as operator on the payment
/// token contract beforehand, otherwise that contract rejects the
/// transfer. Rejections of any kind surface as PaymentFailed.
pub fn transfer<S: HasStateApi>(
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    payment: &ContractAddress,
    buyer: AccountAddress,
    seller: AccountAddress,
    amount: ContractTokenAmount,
) -> ContractResult<()> {
    let parameter: PaymentTransferParameter = TransferParams(vec![Transfer {
        token_id: TokenIdUnit(),
        amount,
        from: Address::Account(buyer),
        to: Receiver::Account(seller),
        data: AdditionalData::empty(),
    }]);
    host.invoke_contract(
        payment,
        &parameter,
        EntrypointName::new_unchecked(TRANSFER_ENTRYPOINT),
        Amount::zero(),
    )
    .map_err(|_| CustomContractError::PaymentFailed)?;
    Ok(())
}
