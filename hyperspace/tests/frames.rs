use cgmath::Vector3;
use hyperspace::{
    Color, DisplayOptions, Error, Session, SimParams,
    camera::Camera3,
    math::Ball,
    render::{Compositor3, DrawItem, FramePhase, SceneCompositor},
};

fn balls(items: &[DrawItem]) -> usize {
    items
        .iter()
        .filter(|item| matches!(item, DrawItem::Ball(_)))
        .count()
}

fn red_segments(items: &[DrawItem]) -> usize {
    items
        .iter()
        .filter(|item| matches!(item, DrawItem::Segment(s) if s.color == Color::RED))
        .count()
}

#[test]
fn axes_are_drawn_on_request() {
    let mut session = Session::new(3, SimParams::default()).unwrap();
    session.set_options(DisplayOptions {
        paths: false,
        barycenter: false,
        axes: true,
    });
    let items = session.tick().unwrap();
    assert_eq!(red_segments(&items), 3);
    assert_eq!(balls(&items), session.body_count());

    session.set_options(DisplayOptions {
        paths: false,
        barycenter: false,
        axes: false,
    });
    assert_eq!(red_segments(&session.draw().unwrap()), 0);
}

#[test]
fn higher_dimensions_reach_the_screen() {
    for dimension in [4, 5, 7] {
        let mut session = Session::new(dimension, SimParams::default()).unwrap();
        let items = session.tick().unwrap();
        assert!(
            balls(&items) > 0,
            "nothing visible in {dimension} dimensions"
        );
        for item in &items {
            if let DrawItem::Ball(ball) = item {
                assert!(ball.center.x.is_finite() && ball.center.y.is_finite());
                assert!(ball.radius > 0.0);
            }
        }
    }
}

#[test]
fn trails_follow_the_bodies() {
    let mut session = Session::new(2, SimParams::default()).unwrap();
    for _ in 0..100 {
        session.tick().unwrap();
    }
    let items = session.draw().unwrap();
    let segments = items.len() - balls(&items);
    assert!(segments >= session.body_count());
}

#[test]
fn compositors_insist_on_a_reset() {
    let mut compositor = Compositor3::new(Camera3::default());
    assert_eq!(compositor.phase(), FramePhase::Idle);
    let ball = Ball::new(Vector3::new(0.0, 0.0, 0.0), 10.0, Color::BLUE);
    assert!(matches!(
        compositor.add_balls(vec![ball.clone()]),
        Err(Error::FramePhase {
            found: FramePhase::Idle,
            ..
        })
    ));

    compositor.reset_frame();
    compositor.add_balls(vec![ball.clone()]).unwrap();
    let items = compositor.build_draw_order().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(compositor.phase(), FramePhase::Built);

    assert!(compositor.build_draw_order().is_err());
    assert!(compositor.add_lines(Vec::new()).is_err());

    compositor.reset_frame();
    assert_eq!(compositor.phase(), FramePhase::Collecting);
    assert!(compositor.build_draw_order().unwrap().is_empty());
}
