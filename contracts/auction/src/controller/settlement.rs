use parallel::{interfaces::MintableClient, validate};
use soroban_sdk::{log, token, Env};

use crate::{
    errors::AuctionError,
    events::AuctionEvents,
    lines::slot_for,
    storage::{get_line, save_line, AuctionConfig, LeadingBid},
};

/// Closes the expired round of `id`: rotates its line, mints `id` to the winner
/// and forwards the winning price to the collectible.
pub fn settle_auction(
    env: &Env,
    config: &AuctionConfig,
    id: u64,
    now: u64,
) -> Result<LeadingBid, AuctionError> {
    let slot = slot_for(config, id)?;
    let mut line = get_line(env, slot);

    if id != line.head {
        // Smaller ids of the same line are rounds that already rotated away.
        validate!(
            env,
            id > line.head,
            AuctionError::AlreadySettled,
            "Auction: Settle auction: round already settled",
            id
        )?;
        log!(env, "Auction: Settle auction: id is not the head of its line", id, line.head);
        return Err(AuctionError::InvalidId);
    }

    let leading = match line.leading() {
        Some(leading) => leading,
        None => {
            log!(env, "Auction: Settle auction: round has no bids", id);
            return Err(AuctionError::NoBids);
        }
    };

    validate!(
        env,
        now >= leading.deadline,
        AuctionError::NotYetExpired,
        "Auction: Settle auction: round still open",
        id,
        leading.deadline
    )?;

    line.rotate(config.num_lines)?;
    save_line(env, slot, &line);

    let minted = MintableClient::new(env, &config.collectible).try_mint(
        &env.current_contract_address(),
        &leading.winner,
        &id,
    );
    if !matches!(minted, Ok(Ok(()))) {
        log!(env, "Auction: Settle auction: mint failed", id);
        return Err(AuctionError::MintOrPayoutFailed);
    }

    if leading.price > 0 {
        let paid = token::TokenClient::new(env, &config.payment_token).try_transfer(
            &env.current_contract_address(),
            &config.collectible,
            &leading.price,
        );
        if !matches!(paid, Ok(Ok(()))) {
            log!(env, "Auction: Settle auction: proceeds transfer failed", id, leading.price);
            return Err(AuctionError::MintOrPayoutFailed);
        }
    }

    AuctionEvents::settle(env, id, leading.winner.clone(), leading.price, line.head);

    Ok(leading)
}
