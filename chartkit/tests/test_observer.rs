use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use chartkit::config::{ChartOverrides, Dimension};
use chartkit::data::ColumnDatum;
use chartkit::error::ObserverError;
use chartkit::observer::{MountedChart, SizeObserver, TargetId};
use chartkit::{Chart, ChartError, ChartLayout, ContainerSize};
use chartkit_text::measurement::fixed::FixedWidthTextMeasurer;
use chartkit_text::measurement::TextMeasurer;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn chart() -> Chart {
    Chart::column(
        vec![ColumnDatum::new("Jan", 100), ColumnDatum::new("Feb", 200)],
        &ChartOverrides::default(),
    )
    .unwrap()
}

fn measurer() -> Arc<dyn TextMeasurer> {
    Arc::new(FixedWidthTextMeasurer::default())
}

type Published = Rc<RefCell<Vec<ChartLayout>>>;

fn mount(observer: &SizeObserver, target: TargetId) -> (MountedChart, Published) {
    init_logging();
    let published: Published = Rc::new(RefCell::new(vec![]));
    let sink = {
        let published = published.clone();
        move |layout: &ChartLayout| published.borrow_mut().push(layout.clone())
    };
    let mounted = MountedChart::mount(observer, target, chart(), measurer(), sink).unwrap();
    (mounted, published)
}

#[test]
fn test_placeholder_then_full_layout() {
    let observer = SizeObserver::new();
    let (mounted, published) = mount(&observer, TargetId(1));

    assert_eq!(published.borrow().len(), 1);
    assert!(published.borrow()[0].is_placeholder());
    assert_eq!(published.borrow()[0].size, ContainerSize::new(0.0, 0.0));

    assert!(observer.resize(TargetId(1), ContainerSize::new(400.0, 300.0)));
    assert_eq!(published.borrow().len(), 2);
    let latest = mounted.layout();
    assert!(!latest.is_placeholder());
    assert_eq!(latest.size, ContainerSize::new(400.0, 300.0));
    assert_eq!(published.borrow()[1], latest);

    // Each resize is a full, synchronous recomputation
    observer.resize(TargetId(1), ContainerSize::new(800.0, 300.0));
    assert_eq!(published.borrow().len(), 3);
    assert_eq!(mounted.layout().size.width, 800.0);
}

#[test]
fn test_unmount_detaches_exactly_once() {
    let observer = SizeObserver::new();
    let (mounted, published) = mount(&observer, TargetId(5));
    assert_eq!(mounted.target(), TargetId(5));
    assert_eq!(observer.subscription_count(), 1);

    mounted.unmount();
    assert_eq!(observer.subscription_count(), 0);
    assert!(!observer.resize(TargetId(5), ContainerSize::new(400.0, 300.0)));
    assert_eq!(published.borrow().len(), 1);
}

#[test]
fn test_repeated_mount_cycles() {
    let observer = SizeObserver::new();
    for cycle in 0..5 {
        let (mounted, published) = mount(&observer, TargetId(9));
        observer.resize(TargetId(9), ContainerSize::new(300.0 + cycle as f32, 200.0));
        assert_eq!(published.borrow().len(), 2);
        drop(mounted);
        assert_eq!(observer.subscription_count(), 0);
    }
}

#[test]
fn test_second_mount_on_target_rejected() {
    let observer = SizeObserver::new();
    let (_mounted, _) = mount(&observer, TargetId(2));
    let err = MountedChart::mount(&observer, TargetId(2), chart(), measurer(), |_| {})
        .err()
        .unwrap();
    assert!(matches!(
        err,
        ChartError::Observer(ObserverError::AlreadyObserved(TargetId(2)))
    ));
    assert_eq!(observer.subscription_count(), 1);
}

#[test]
fn test_independent_targets() {
    let observer = SizeObserver::new();
    let (left, left_published) = mount(&observer, TargetId(10));
    let (right, right_published) = mount(&observer, TargetId(11));

    observer.resize(TargetId(10), ContainerSize::new(320.0, 240.0));
    assert_eq!(left_published.borrow().len(), 2);
    assert_eq!(right_published.borrow().len(), 1);

    drop(left);
    observer.resize(TargetId(11), ContainerSize::new(320.0, 240.0));
    assert_eq!(right_published.borrow().len(), 2);
    assert_eq!(right.layout().size, ContainerSize::new(320.0, 240.0));
}

#[test]
fn test_fixed_size_chart_lays_out_before_measurement() {
    let observer = SizeObserver::new();
    let overrides = ChartOverrides {
        width: Some(Dimension::Fixed(500.0)),
        height: Some(Dimension::Fixed(250.0)),
        ..Default::default()
    };
    let chart = Chart::column(vec![ColumnDatum::new("a", 1)], &overrides).unwrap();
    let mounted = MountedChart::mount(&observer, TargetId(3), chart, measurer(), |_| {}).unwrap();
    assert!(!mounted.layout().is_placeholder());
    assert_eq!(mounted.layout().size, ContainerSize::new(500.0, 250.0));
}
