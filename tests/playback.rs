mod playback {
  use hullviz::algorithms::Algorithm;
  use hullviz::data::Point;
  use hullviz::session::*;
  use hullviz::trace::StepKind;

  use rand::rngs::SmallRng;
  use rand::SeedableRng;
  use std::cell::RefCell;
  use std::rc::Rc;
  use std::time::Duration;

  fn random_session(algorithm: Algorithm, seed: u64) -> Session {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = Session::with_config(SessionConfig {
      algorithm,
      speed: Duration::from_millis(1),
    });
    session.add_random_points(40, 100, 100, &mut rng);
    session
  }

  #[test]
  fn forward_then_backward_restores_hull() {
    for algo in Algorithm::ALL {
      let mut session = random_session(algo, 1);
      session.build_trace();
      let total = session.total_steps();
      for _ in 0..total {
        let before = session.hull().to_vec();
        let cursor = session.current_step_index();
        session.step_forward();
        session.step_backward();
        assert_eq!(session.hull(), &before[..]);
        assert_eq!(session.current_step_index(), cursor);
        session.step_forward();
        assert!(session.current_step_index() <= total);
      }
      assert!(session.is_finished());
      assert_eq!(session.state(), SessionState::Finished);
    }
  }

  #[test]
  fn cursor_stays_in_bounds() {
    let mut session = random_session(Algorithm::GrahamScan, 2);
    for _ in 0..3 {
      session.step_backward();
    }
    assert_eq!(session.current_step_index(), 0);
    session.build_trace();
    let total = session.total_steps();
    for _ in 0..total + 5 {
      session.step_forward();
    }
    assert_eq!(session.current_step_index(), total);
  }

  #[test]
  fn playback_matches_instant() {
    for algo in Algorithm::ALL {
      let mut stepped = random_session(algo, 3);
      let mut instant = random_session(algo, 3);
      instant.compute_instant();

      stepped.play();
      while stepped.advance() {}
      assert!(stepped.is_finished());
      assert_eq!(stepped.hull(), instant.hull());
      assert_eq!(
        stepped.current_step().map(|step| step.kind()),
        Some(StepKind::FinalHull)
      );
    }
  }

  #[test]
  fn step_events_follow_cursor() {
    let mut session = random_session(Algorithm::MonotoneChain, 4);
    let steps = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&steps);
    session.subscribe(move |event| {
      if let SessionEvent::StepChanged { current, .. } = event {
        sink.borrow_mut().push(*current);
      }
    });
    session.step_forward();
    session.step_forward();
    session.step_backward();
    session.step_forward();
    assert_eq!(*steps.borrow(), vec![1, 2, 1, 2]);
  }

  #[test]
  fn switching_algorithm_discards_trace() {
    let mut session = random_session(Algorithm::MonotoneChain, 5);
    session.play();
    session.advance();
    session.select_algorithm(Algorithm::GrahamScan);
    assert!(!session.is_playing());
    assert_eq!(session.state(), SessionState::ReadyToRun);
    assert!(session.trace().is_none());
    session.step_forward();
    assert!(session.current_step().is_some_and(|step| step.kind() == StepKind::HighlightPoint));
  }

  #[test]
  fn highlight_tolerance() {
    let mut session = Session::new();
    session.add_points(vec![
      Point::new([0., 0.]),
      Point::new([4., 0.]),
      Point::new([2., 3.]),
    ]);
    session.step_forward();
    assert!(session.is_highlighted(&Point::new([2.005, 3.])));
    assert!(!session.is_highlighted(&Point::new([2.5, 3.])));
  }
}
