mod refund_flow;
mod sale_flow;
mod vesting_flow;
