use gridbayes::{
    observations_from_sequence, CoinLikelihood, Error, Likelihood, Observation,
    Outcome,
};

#[test]
fn test_coin_likelihood() {
    let model = CoinLikelihood;
    assert_eq!(model.likelihood(Outcome::Heads, 0.3), 0.3);
    assert!((model.likelihood(Outcome::Tails, 0.3) - 0.7).abs() < 1e-15);
    assert_eq!(model.likelihood(Outcome::Heads, 0.0), 0.0);
    assert_eq!(model.likelihood(Outcome::Tails, 1.0), 0.0);
}

#[test]
fn test_closure_is_a_likelihood() {
    // A test that flags a defect with probability x, and false alarms 10%
    // of the time.
    let model = |outcome: Outcome, x: f64| match outcome {
        Outcome::Heads => 0.9 * x + 0.1 * (1.0 - x),
        Outcome::Tails => 0.1 * x + 0.9 * (1.0 - x),
    };
    assert!((model.likelihood(Outcome::Heads, 0.0) - 0.1).abs() < 1e-15);
    assert!((model.likelihood(Outcome::Tails, 0.0) - 0.9).abs() < 1e-15);
}

#[test]
fn test_parse_outcome() {
    assert_eq!("H".parse::<Outcome>().unwrap(), Outcome::Heads);
    assert_eq!(" heads ".parse::<Outcome>().unwrap(), Outcome::Heads);
    assert_eq!("Tails".parse::<Outcome>().unwrap(), Outcome::Tails);
    assert!(matches!(
        "edge".parse::<Outcome>(),
        Err(Error::InvalidArgument { .. })
    ));
    assert_eq!(Outcome::Heads.to_string(), "heads");
    assert_eq!(Outcome::Tails.symbol(), 'T');
}

#[test]
fn test_sequence() {
    let obs = observations_from_sequence("HHT h, t t").unwrap();
    assert_eq!(obs, vec![Observation::heads(3), Observation::tails(3)]);

    let obs = observations_from_sequence("HHH").unwrap();
    assert_eq!(obs, vec![Observation::heads(3)]);

    assert!(observations_from_sequence("").unwrap().is_empty());
    assert!(observations_from_sequence("HXT").is_err());
}
