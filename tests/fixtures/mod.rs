/// Deployment fixtures shared by the scenario tests.
use base_sale::{BaseSaleContract, BaseSaleContractClient};
use capped_sale::{CappedSaleContract, CappedSaleContractClient};
use public_sale::{PublicSaleContract, PublicSaleContractClient};
use sale_token::{SaleTokenContract, SaleTokenContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};
use token_sale::{CapParams, RefundParams, SaleParams};
use token_vesting::{TokenVestingContract, TokenVestingContractClient};
use whitelisting::{WhitelistingContract, WhitelistingContractClient};

/// One whole unit of a 7-decimal asset.
pub const UNIT: i128 = 10_000_000;
pub const DAY: u64 = 24 * 60 * 60;
pub const YEAR: u64 = 365 * DAY;

/// Sale opening time used by every scenario.
pub const T: u64 = 1_700_000_000;

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|l| l.timestamp = timestamp);
}

/// Collaborators every sale variant needs, deployed and initialized.
pub struct World<'a> {
    pub env: Env,
    pub operator: Address,
    pub wallet: Address,
    pub payment: token::Client<'a>,
    pub payment_admin: token::StellarAssetClient<'a>,
    pub token: SaleTokenContractClient<'a>,
    pub list: WhitelistingContractClient<'a>,
}

impl<'a> World<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        set_time(&env, T - DAY);

        let operator = Address::generate(&env);
        let wallet = Address::generate(&env);

        let issuer = Address::generate(&env);
        let payment_id = env.register_stellar_asset_contract_v2(issuer).address();

        let token_id = env.register_contract(None, SaleTokenContract);
        let token = SaleTokenContractClient::new(&env, &token_id);
        token.initialize(
            &operator,
            &String::from_str(&env, "Regulated Sale Token"),
            &String::from_str(&env, "RST"),
            &7u32,
            &(1_000_000 * UNIT),
        );

        let list_id = env.register_contract(None, WhitelistingContract);
        let list = WhitelistingContractClient::new(&env, &list_id);
        list.initialize(&operator);

        World {
            payment: token::Client::new(&env, &payment_id),
            payment_admin: token::StellarAssetClient::new(&env, &payment_id),
            env,
            operator,
            wallet,
            token,
            list,
        }
    }

    /// A funded investor, approved unless `approved` is false.
    pub fn investor(&self, funds: i128, approved: bool) -> Address {
        let investor = Address::generate(&self.env);
        if funds > 0 {
            self.payment_admin.mint(&investor, &funds);
        }
        if approved {
            self.list.approve_investor(&self.operator, &investor);
        }
        investor
    }

    /// Seven-day window opening at `T`.
    pub fn sale_params(&self) -> SaleParams {
        SaleParams {
            start_time: T,
            end_time: T + 7 * DAY,
            wallet: self.wallet.clone(),
            payment_token: self.payment.address.clone(),
            token: self.token.address.clone(),
            whitelisting: self.list.address.clone(),
        }
    }

    pub fn cap_params(&self) -> CapParams {
        CapParams {
            token_cap: 1_000 * UNIT,
            individual_cap: 100 * UNIT,
        }
    }

    pub fn base_sale(&self) -> BaseSaleContractClient<'a> {
        let id = self.env.register_contract(None, BaseSaleContract);
        let sale = BaseSaleContractClient::new(&self.env, &id);
        sale.initialize(&self.operator, &self.sale_params());
        sale
    }

    /// Capped sale that already owns the sale token.
    pub fn capped_sale(&self) -> CappedSaleContractClient<'a> {
        let id = self.env.register_contract(None, CappedSaleContract);
        let sale = CappedSaleContractClient::new(&self.env, &id);
        sale.initialize(&self.operator, &self.sale_params(), &self.cap_params());
        self.token.transfer_ownership(&id);
        sale
    }

    /// Public sale that already owns the sale token. Refunds close a day after the window.
    pub fn public_sale(&self, refund_closing_token_cap: i128) -> PublicSaleContractClient<'a> {
        let id = self.env.register_contract(None, PublicSaleContract);
        let sale = PublicSaleContractClient::new(&self.env, &id);
        sale.initialize(
            &self.operator,
            &self.sale_params(),
            &self.cap_params(),
            &RefundParams {
                refund_closing_time: T + 8 * DAY,
                refund_closing_token_cap,
            },
        );
        self.token.transfer_ownership(&id);
        sale
    }

    /// Vesting ledger paying out the sale token.
    pub fn vesting(&self) -> TokenVestingContractClient<'a> {
        let id = self.env.register_contract(None, TokenVestingContract);
        let vesting = TokenVestingContractClient::new(&self.env, &id);
        vesting.initialize(&self.operator, &self.token.address, &self.list.address);
        vesting
    }
}
