use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Identifier assigned to a listing by the marketplace. Monotonically
/// increasing, never reused.
pub type ListingId = u64;

/// Contract token ID type of the listed NFTs.
pub type ContractTokenId = TokenIdVec;

/// Amount type of the payment token.
pub type ContractTokenAmount = TokenAmountU64;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;

/// Transfer parameter of the payment token contract. Fungible CIS-2
/// contracts with a single token use the unit token ID.
pub type PaymentTransferParameter = TransferParams<TokenIdUnit, ContractTokenAmount>;

/// Transfer parameter of the NFT contract.
pub type NftTransferParameter = TransferParams<ContractTokenId, TokenAmountU8>;
