#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
use soroban_sdk::{vec, Env, IntoVal};

fn setup_env() -> (Env, MedicalRecordsContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(MedicalRecordsContract, ());
    let client = MedicalRecordsContractClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    client.initialize(&admin);
    (env, client, admin)
}

fn create_record(env: &Env, client: &MedicalRecordsContractClient, provider: &Address) -> u64 {
    client.create(
        provider,
        &String::from_str(env, "subject-7"),
        &2048,
        &String::from_str(env, "imaging referral"),
        &vec![env, String::from_str(env, "radiology")],
    )
}

#[test]
fn test_set_policy_requires_admin() {
    let (env, client, _admin) = setup_env();
    let stranger = Address::generate(&env);

    let res = client.try_set_viewer_policy(&stranger, &ViewerPolicy::RoleTable);
    assert!(matches!(res, Err(Ok(ContractError::AdminOnly))));
    assert_eq!(client.get_viewer_policy(), ViewerPolicy::AdminOnly);
}

#[test]
fn test_set_policy_before_initialize_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(MedicalRecordsContract, ());
    let client = MedicalRecordsContractClient::new(&env, &contract_id);
    let caller = Address::generate(&env);

    let res = client.try_set_viewer_policy(&caller, &ViewerPolicy::ConsentList);
    assert!(matches!(res, Err(Ok(ContractError::NotInitialized))));
}

#[test]
fn test_uninitialized_contract_admits_no_viewer() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(MedicalRecordsContract, ());
    let client = MedicalRecordsContractClient::new(&env, &contract_id);
    let provider = Address::generate(&env);
    let viewer = Address::generate(&env);
    let id = create_record(&env, &client, &provider);

    let res = client.try_authorize_access(&provider, &id, &viewer);
    assert!(matches!(res, Err(Ok(ContractError::AccessViolation))));
}

#[test]
fn test_role_table_policy() {
    let (env, client, admin) = setup_env();
    let provider = Address::generate(&env);
    let viewer = Address::generate(&env);
    let id = create_record(&env, &client, &provider);

    client.set_viewer_policy(&admin, &ViewerPolicy::RoleTable);
    assert_eq!(client.get_viewer_policy(), ViewerPolicy::RoleTable);

    let res = client.try_authorize_access(&provider, &id, &viewer);
    assert!(matches!(res, Err(Ok(ContractError::AccessViolation))));

    client.register_viewer(&admin, &viewer);
    assert!(client.is_registered_viewer(&viewer));
    client.authorize_access(&provider, &id, &viewer);
    assert!(client.verify_access(&id, &viewer));

    // unregistering stops new grants but leaves existing ones alone
    client.unregister_viewer(&admin, &viewer);
    assert!(!client.is_registered_viewer(&viewer));
    assert!(client.verify_access(&id, &viewer));
    let res = client.try_authorize_access(&provider, &id, &viewer);
    assert!(matches!(res, Err(Ok(ContractError::AccessViolation))));
}

#[test]
fn test_register_viewer_requires_admin() {
    let (env, client, _admin) = setup_env();
    let stranger = Address::generate(&env);
    let viewer = Address::generate(&env);

    let res = client.try_register_viewer(&stranger, &viewer);
    assert!(matches!(res, Err(Ok(ContractError::AdminOnly))));
    assert!(!client.is_registered_viewer(&viewer));

    let res = client.try_unregister_viewer(&stranger, &viewer);
    assert!(matches!(res, Err(Ok(ContractError::AdminOnly))));
}

#[test]
fn test_consent_list_policy() {
    let (env, client, admin) = setup_env();
    let provider = Address::generate(&env);
    let successor = Address::generate(&env);
    let viewer = Address::generate(&env);
    let id = create_record(&env, &client, &provider);

    client.set_viewer_policy(&admin, &ViewerPolicy::ConsentList);

    // admin is no longer special
    let res = client.try_authorize_access(&provider, &id, &admin);
    assert!(matches!(res, Err(Ok(ContractError::AccessViolation))));

    client.grant_consent(&viewer, &provider);
    assert!(client.has_consent(&provider, &viewer));
    client.authorize_access(&provider, &id, &viewer);
    assert!(client.verify_access(&id, &viewer));

    // consent belongs to the provider, not the record
    client.transfer_ownership(&provider, &id, &successor);
    let other_viewer = Address::generate(&env);
    client.grant_consent(&other_viewer, &provider);
    let res = client.try_authorize_access(&successor, &id, &other_viewer);
    assert!(matches!(res, Err(Ok(ContractError::AccessViolation))));

    client.revoke_consent(&viewer, &provider);
    assert!(!client.has_consent(&provider, &viewer));
}

#[test]
fn test_consent_is_signed_by_the_viewer() {
    let (env, client, _admin) = setup_env();
    let provider = Address::generate(&env);
    let viewer = Address::generate(&env);

    client.grant_consent(&viewer, &provider);
    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, viewer);
}

#[test]
fn test_provider_cannot_consent_for_a_viewer() {
    let (env, client, admin) = setup_env();
    let provider = Address::generate(&env);
    let viewer = Address::generate(&env);
    let id = create_record(&env, &client, &provider);
    client.set_viewer_policy(&admin, &ViewerPolicy::ConsentList);

    let res = client
        .mock_auths(&[MockAuth {
            address: &provider,
            invoke: &MockAuthInvoke {
                contract: &client.address,
                fn_name: "grant_consent",
                args: (&viewer, &provider).into_val(&env),
                sub_invokes: &[],
            },
        }])
        .try_grant_consent(&viewer, &provider);
    assert!(res.is_err());
    assert!(!client.has_consent(&provider, &viewer));

    env.mock_all_auths();
    let res = client.try_authorize_access(&provider, &id, &viewer);
    assert!(matches!(res, Err(Ok(ContractError::AccessViolation))));
}
