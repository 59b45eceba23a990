use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Unknown listing id (Error code: -4).
    UnknownListing,
    /// Listing price must be above zero (Error code: -5).
    InvalidPrice,
    /// Listing was deactivated or already sold (Error code: -6).
    ListingInactive,
    /// Listing is already inactive and can not be deactivated again
    /// (Error code: -7).
    AlreadyInactive,
    /// The payment token contract rejected the buyer to seller transfer
    /// (Error code: -8).
    PaymentFailed,
    /// The NFT contract rejected the seller to buyer transfer
    /// (Error code: -9).
    TransferFailed,
    /// Only account addresses can call this function (Error code: -10).
    OnlyAccountAddress,
    /// Only the seller of the listing has access (Error code: -11).
    Unauthorized,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
