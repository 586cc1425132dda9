use feescope::domain::charges::{
    BillingPeriod, ChargeModel, CurrentModel, FeeSchedule, ProposedModel, ScenarioParameters,
    safe_ratio,
};
use feescope::domain::sampling::RevenueDomain;

fn scenario(
    downloads: f64,
    small_business: bool,
    alternate_payment: bool,
    third_party: bool,
) -> ScenarioParameters {
    ScenarioParameters {
        downloads,
        small_business_program: small_business,
        alternate_payment_processing: alternate_payment,
        third_party_store: third_party,
        period: BillingPeriod::Yearly,
    }
}

#[test]
fn test_current_model_over_domain() {
    let domain = RevenueDomain::new(1000.0, 501).unwrap();
    let model = CurrentModel::from_schedule(&FeeSchedule::default(), BillingPeriod::Yearly);

    for (r, fee) in domain.samples().iter().zip(model.fees(domain.samples())) {
        assert_eq!(fee, 0.3 * r);
    }
}

#[test]
fn test_proposed_model_for_every_flag_combination() {
    let schedule = FeeSchedule::default();
    let domain = RevenueDomain::new(1000.0, 101).unwrap();

    for (small_business, alternate_payment, expected_rate) in [
        (false, false, 0.20),
        (true, false, 0.15),
        (false, true, 0.20 - 0.03),
        (true, true, 0.15 - 0.03),
    ] {
        for downloads in [1.0, 37.5, 100.0, 2500.0] {
            let params = scenario(downloads, small_business, alternate_payment, false);
            let model = ProposedModel::from_scenario(&schedule, &params);

            for &r in domain.samples() {
                let expected = (downloads - 1.0) * 0.543 + r * expected_rate;
                assert!((model.fee(r) - expected).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn test_third_party_store_is_constant_in_revenue() {
    let schedule = FeeSchedule::default();

    for period in [BillingPeriod::Yearly, BillingPeriod::Monthly] {
        let params = ScenarioParameters {
            period,
            ..scenario(100.0, true, true, true)
        };
        let model = ProposedModel::from_scenario(&schedule, &params);
        let expected = period.scale((100.0 - 1.0) * 0.543);

        for r in [0.0, 1.0, 250.0, 1000.0] {
            assert_eq!(model.fee(r), expected);
        }
    }
}

#[test]
fn test_monthly_framing_divides_by_twelve() {
    let schedule = FeeSchedule::default();
    let yearly = scenario(100.0, false, false, false);
    let monthly = ScenarioParameters {
        period: BillingPeriod::Monthly,
        ..yearly
    };

    let current_monthly = CurrentModel::from_schedule(&schedule, BillingPeriod::Monthly);
    let proposed_yearly = ProposedModel::from_scenario(&schedule, &yearly);
    let proposed_monthly = ProposedModel::from_scenario(&schedule, &monthly);

    for r in [0.0, 120.0, 1000.0] {
        assert_eq!(current_monthly.fee(r), 0.3 * r / 12.0);
        assert!((proposed_monthly.fee(r) * 12.0 - proposed_yearly.fee(r)).abs() < 1e-9);
    }
}

#[test]
fn test_safe_ratio_never_divides_by_zero() {
    for fee in [0.0, 1.0, -1.0, 53.757, f64::MAX] {
        assert_eq!(safe_ratio(fee, 0.0), 0.0);
    }
}

#[test]
fn test_evaluation_is_idempotent() {
    let schedule = FeeSchedule::default();
    let params = scenario(123.4, true, false, false);
    let domain = RevenueDomain::new(777.0, 1234).unwrap();

    let a = ProposedModel::from_scenario(&schedule, &params).fees(domain.samples());
    let b = ProposedModel::from_scenario(&schedule, &params).fees(domain.samples());

    let a_bits: Vec<u64> = a.iter().map(|f| f.to_bits()).collect();
    let b_bits: Vec<u64> = b.iter().map(|f| f.to_bits()).collect();
    assert_eq!(a_bits, b_bits);
}
