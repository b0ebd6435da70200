use parallel::validate;
use soroban_sdk::{log, token, Address, Env};

use crate::{
    controller::refund::refund,
    errors::AuctionError,
    events::AuctionEvents,
    lines::slot_for,
    msg::LineStatus,
    storage::{get_line, save_line, AuctionConfig, LeadingBid},
    vip,
};

/// Admits a bid of `amount` on `id` at time `now` and returns the new leading bid.
///
/// Nothing is written unless every check passes. The new leading bid is stored
/// before the bidder is charged and the previous leader is refunded.
pub fn create_bid(
    env: &Env,
    config: &AuctionConfig,
    bidder: &Address,
    id: u64,
    amount: i128,
    now: u64,
) -> Result<LeadingBid, AuctionError> {
    let slot = slot_for(config, id)?;
    let mut line = get_line(env, slot);

    validate!(
        env,
        id == line.head,
        AuctionError::InvalidId,
        "Auction: Create bid: id is not the head of its line",
        id,
        line.head
    )?;

    validate!(
        env,
        line.status(now) != LineStatus::Expired,
        AuctionError::AuctionClosed,
        "Auction: Create bid: round expired and waits for settlement",
        id
    )?;

    if vip::is_vip(env, id) {
        validate!(
            env,
            vip::is_eligible(env, bidder),
            AuctionError::NotEligible,
            "Auction: Create bid: VIP id, bidder holds no required collection",
            id
        )?;
    }

    let min_required = line.min_price(config)?;
    validate!(
        env,
        amount >= min_required,
        AuctionError::BidTooLow,
        "Auction: Create bid: bid below the minimum price",
        amount,
        min_required
    )?;

    let previous = line.leading();
    let deadline = match &previous {
        Some(previous) => extend_deadline(previous.deadline, now, config.extra_time),
        None => now
            .checked_add(config.duration)
            .ok_or(AuctionError::MathOverflow)?,
    };

    let leading = LeadingBid {
        winner: bidder.clone(),
        price: amount,
        deadline,
    };
    line.set_leading(&leading);
    save_line(env, slot, &line);

    collect(env, &config.payment_token, bidder, amount)?;

    if let Some(previous) = previous {
        refund(
            env,
            &config.payment_token,
            id,
            &previous.winner,
            previous.price,
        )?;
    }

    AuctionEvents::bid(env, id, bidder.clone(), amount, deadline);

    Ok(leading)
}

/// Anti-snipe: a bid inside the last `extra_time` seconds pushes the deadline to
/// `now + extra_time`. The deadline never moves backwards.
pub fn extend_deadline(deadline: u64, now: u64, extra_time: u64) -> u64 {
    deadline.max(now.saturating_add(extra_time))
}

fn collect(
    env: &Env,
    payment_token: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), AuctionError> {
    if amount == 0 {
        return Ok(());
    }

    let result = token::TokenClient::new(env, payment_token).try_transfer(
        from,
        &env.current_contract_address(),
        &amount,
    );
    if !matches!(result, Ok(Ok(()))) {
        log!(env, "Auction: Create bid: could not collect the bid amount", from.clone(), amount);
        return Err(AuctionError::PaymentFailed);
    }

    Ok(())
}
