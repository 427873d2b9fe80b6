#![no_std]
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String};
use stellar_tokens::fungible::Base as TokenBase;

#[contracttype]
pub enum DataKey {
    Admin,
}

const TTL_THRESHOLD: u32 = 100_000;
const TTL_EXTEND_TO: u32 = 200_000;

/// Fungible asset used on either side of the lending ledger (collateral or loan).
///
/// Standard SEP-41 surface backed by `stellar_tokens`, plus an owner-gated `mint`
/// that operators use to fund accounts and the ledger's loan reserve.
#[contract]
pub struct AssetToken;

#[contractimpl]
impl AssetToken {
    pub fn initialize(env: Env, admin: Address, name: String, symbol: String, decimals: u32) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic!("already initialized");
        }
        admin.require_auth();
        if decimals > 18 {
            panic!("invalid decimals");
        }
        TokenBase::set_metadata(&env, decimals, name, symbol);
        env.storage().instance().set(&DataKey::Admin, &admin);
        bump_instance_ttl(&env);
    }

    pub fn name(env: Env) -> String {
        TokenBase::name(&env)
    }

    pub fn symbol(env: Env) -> String {
        TokenBase::symbol(&env)
    }

    pub fn decimals(env: Env) -> u32 {
        TokenBase::decimals(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        TokenBase::total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        TokenBase::balance(&env, &id)
    }

    pub fn balance_of(env: Env, id: Address) -> i128 {
        Self::balance(env, id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        TokenBase::allowance(&env, &from, &spender)
    }

    /// `owner` authorization is enforced by the fungible base.
    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128, live_until_ledger: u32) {
        if amount < 0 {
            panic!("bad amount");
        }
        TokenBase::approve(&env, &owner, &spender, amount, live_until_ledger);
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        if amount <= 0 {
            panic!("bad amount");
        }
        TokenBase::transfer(&env, &from, &to, amount);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        if amount <= 0 {
            panic!("bad amount");
        }
        TokenBase::transfer_from(&env, &spender, &from, &to, amount);
    }

    pub fn mint(env: Env, to: Address, amount: i128) {
        require_admin(&env);
        if amount <= 0 {
            panic!("bad amount");
        }
        TokenBase::mint(&env, &to, amount);
    }

    pub fn admin(env: Env) -> Address {
        read_admin(&env)
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        require_admin(&env);
        env.storage().instance().set(&DataKey::Admin, &new_admin);
        bump_instance_ttl(&env);
    }
}

fn read_admin(env: &Env) -> Address {
    let admin = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("no admin");
    bump_instance_ttl(env);
    admin
}

fn require_admin(env: &Env) -> Address {
    let admin = read_admin(env);
    admin.require_auth();
    admin
}

fn bump_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}
