use billed::clients::MemoryBillStore;
use billed::infrastructure::{MemorySessionStore, Session};
use billed::models::{Bill, BillStatus, User};
use billed::presenter::View;
use billed::routing::{NavIcon, Route, Router};
use billed::{logger, App, Config, NewBillForm, Receipt};
use std::path::PathBuf;
use std::sync::Arc;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("billed-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("创建临时目录失败");
    dir
}

#[tokio::test]
async fn test_submit_bill_through_router() {
    logger::init();

    let store = Arc::new(MemoryBillStore::with_bills(vec![Bill {
        id: Some("old".to_string()),
        name: "ancienne".to_string(),
        date: "2021-01-01".to_string(),
        status: BillStatus::Accepted,
        ..Bill::default()
    }]));
    let sessions = Arc::new(MemorySessionStore::new());
    Session::login(sessions.as_ref(), User::employee("a@a"), None).unwrap();
    let mut router = Router::new(store.clone(), sessions);

    router.navigate(Route::NewBill).await;
    assert_eq!(router.active_icon(), Some(NavIcon::Mail));

    let mut flow = router.new_bill_flow().unwrap();
    flow.on_file_selected(Receipt::new("test.png", "image/png", b"dummy content".to_vec()))
        .await
        .unwrap();

    let form = NewBillForm {
        name: "ticket".to_string(),
        amount: "50".to_string(),
        date: "2023-05-05".to_string(),
        pct: String::new(),
        ..NewBillForm::default()
    };
    flow.on_submit(&form).await.unwrap();

    let rendered = router.process_pending().await.expect("应该跳转到列表页");
    assert_eq!(rendered.route, Route::Bills);
    assert_eq!(rendered.active_icon, Some(NavIcon::Window));

    let View::Bills(view) = &rendered.view else {
        panic!("应该显示报销单列表: {:?}", rendered.view);
    };
    assert_eq!(view.dates(), vec!["2023-05-05", "2021-01-01"]);
    assert_eq!(view.rows[0].name, "ticket");
    assert_eq!(view.rows[0].status_label, "En attente");

    let (selector, bill) = &store.update_calls()[0];
    assert_eq!(selector, "0001");
    assert_eq!(bill.pct, 20);
    assert_eq!(bill.file_name.as_deref(), Some("test.png"));
}

#[tokio::test]
async fn test_batch_run_counts_rejected_drafts() {
    logger::init();

    let dir = temp_dir("batch");
    std::fs::write(dir.join("taxi.png"), b"\x89PNG fake").unwrap();
    std::fs::write(dir.join("facture.pdf"), b"%PDF fake").unwrap();
    std::fs::write(
        dir.join("1-taxi.toml"),
        concat!(
            "receipt = \"taxi.png\"\nname = \"Taxi aéroport\"\n",
            "date = \"2023-05-05\"\namount = 42\npct = 10\n",
        ),
    )
    .unwrap();
    std::fs::write(
        dir.join("2-hotel.toml"),
        concat!(
            "receipt = \"facture.pdf\"\ntype = \"Hôtel et logement\"\n",
            "name = \"Hôtel\"\ndate = \"2022-03-03\"\namount = 120\n",
        ),
    )
    .unwrap();
    std::fs::write(
        dir.join("3-missing.toml"),
        "receipt = \"absent.jpg\"\nname = \"Repas\"\ndate = \"2021-01-01\"\namount = 30\n",
    )
    .unwrap();

    let config = Config {
        drafts_folder: dir.to_string_lossy().to_string(),
        output_log_file: dir.join("run.log").to_string_lossy().to_string(),
        ..Config::default()
    };

    let mut app = App::with_store(config, MemoryBillStore::new()).unwrap();
    let stats = app.run().await.unwrap();

    assert_eq!(stats.total, 3);
    assert_eq!(stats.success, 1);
    assert_eq!(stats.failed, 2);

    let rendered = app.router().current().unwrap();
    let View::Bills(view) = &rendered.view else {
        panic!("应该显示报销单列表: {:?}", rendered.view);
    };
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].name, "Taxi aéroport");
    assert_eq!(view.rows[0].formatted_date, "5 Mai. 23");

    let log = std::fs::read_to_string(dir.join("run.log")).unwrap();
    assert!(log.contains("报销单提交日志"));
    assert!(log.contains("✅ 已提交 | 2023-05-05 | Taxi aéroport"));
    assert!(log.contains("❌ 未提交 | 2021-01-01 | Repas"));
    assert_eq!(stats.outcomes.len(), 3);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_batch_run_without_drafts_folder() {
    let dir = temp_dir("empty");
    let config = Config {
        drafts_folder: dir.join("nope").to_string_lossy().to_string(),
        output_log_file: dir.join("run.log").to_string_lossy().to_string(),
        ..Config::default()
    };

    let store = MemoryBillStore::new();
    store.fail_list_with(500);
    let mut app = App::with_store(config, store).unwrap();
    let stats = app.run().await.unwrap();

    assert_eq!(stats.total, 0);
    let rendered = app.router().current().unwrap();
    assert!(rendered.view.to_string().contains("Erreur 500"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
#[ignore] // 默认忽略，需要本地后端：cargo test -- --ignored
async fn test_submit_drafts_to_backend() {
    logger::init();

    let config = Config::from_env();
    let mut app = App::initialize(config).expect("初始化失败");
    let stats = app.run().await.expect("提交失败");

    assert_eq!(stats.failed, 0, "所有草稿都应该提交成功");
}
