use soroban_sdk::{log, token, Address, Env};

use crate::{errors::AuctionError, events::AuctionEvents};

/// Returns `amount` of the payment token to an outbid bidder.
///
/// Must only run after the line already records its new leading bid, so that
/// whatever the transfer triggers observes the updated round. A failed transfer
/// fails the enclosing bid, which rolls back every write made before it.
pub fn refund(
    env: &Env,
    payment_token: &Address,
    id: u64,
    to: &Address,
    amount: i128,
) -> Result<(), AuctionError> {
    if amount > 0 {
        let result = token::TokenClient::new(env, payment_token).try_transfer(
            &env.current_contract_address(),
            to,
            &amount,
        );
        if !matches!(result, Ok(Ok(()))) {
            log!(env, "Auction: Refund: transfer to outbid bidder failed", id, to.clone(), amount);
            return Err(AuctionError::RefundFailed);
        }
    }

    AuctionEvents::refund(env, id, to.clone(), amount);
    Ok(())
}
