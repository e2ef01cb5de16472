//! Repository behavior against an in-memory SurrealDB

mod common;

use restaurant_server::billing::{compute_order_billing, first_billing};
use restaurant_server::db::repository::RepoError;
use shared::client::SignupRequest;
use shared::models::{
    DiningTableCreate, DiningTableUpdate, FoodCreate, FoodUpdate, InvoiceCreate, ItemQuantity,
    MenuCreate, MenuUpdate, OrderCreate, OrderItemCreate, OrderItemPack, OrderItemUpdate,
    OrderUpdate, PaymentStatus, UserType,
};
use shared::util::now_millis;

async fn seed_menu_and_foods(
    state: &restaurant_server::ServerState,
) -> (String, String, String) {
    let menu = state
        .menus()
        .create(MenuCreate {
            name: "Dinner".into(),
            category: "Mains".into(),
            start_date: None,
            end_date: None,
        })
        .await
        .unwrap();
    let soup = state
        .foods()
        .create(FoodCreate {
            name: "Soup".into(),
            price: 12.0,
            food_image: "/img/soup.png".into(),
            menu_id: menu.menu_id.clone(),
        })
        .await
        .unwrap();
    let salad = state
        .foods()
        .create(FoodCreate {
            name: "Salad".into(),
            price: 8.25,
            food_image: "/img/salad.png".into(),
            menu_id: menu.menu_id.clone(),
        })
        .await
        .unwrap();
    (menu.menu_id, soup.food_id, salad.food_id)
}

#[tokio::test]
async fn test_public_id_is_uuid_and_record_key() {
    let state = common::test_state().await;

    let table = state
        .tables()
        .create(DiningTableCreate {
            number_of_guests: 4,
            table_number: 5,
        })
        .await
        .unwrap();

    assert!(uuid::Uuid::parse_str(&table.table_id).is_ok());
    let fetched = state.tables().find_by_id(&table.table_id).await.unwrap();
    assert_eq!(fetched, Some(table));
}

#[tokio::test]
async fn test_rocksdb_backend() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = common::test_config();
    config.database.url = format!("rocksdb://{}", dir.path().join("data").display());
    let state = restaurant_server::ServerState::initialize(&config).await.unwrap();

    let table = state
        .tables()
        .create(DiningTableCreate {
            number_of_guests: 2,
            table_number: 11,
        })
        .await
        .unwrap();

    let all = state.tables().find_all(None).await.unwrap();
    assert_eq!(all, vec![table]);
}

#[tokio::test]
async fn test_partial_update_keeps_absent_fields() {
    let state = common::test_state().await;
    let table = state
        .tables()
        .create(DiningTableCreate {
            number_of_guests: 4,
            table_number: 5,
        })
        .await
        .unwrap();

    let updated = state
        .tables()
        .update(
            &table.table_id,
            DiningTableUpdate {
                number_of_guests: Some(6),
                table_number: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.table_id, table.table_id);
    assert_eq!(updated.number_of_guests, 6);
    assert_eq!(updated.table_number, 5);
    assert_eq!(updated.created_at, table.created_at);
    assert!(updated.updated_at > table.updated_at);
}

#[tokio::test]
async fn test_update_unknown_id_creates_record() {
    let state = common::test_state().await;

    let menu = state
        .menus()
        .update(
            "2b0a3f8e-1111-4000-8000-00000000abcd",
            MenuUpdate {
                name: Some("Brunch".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(menu.menu_id, "2b0a3f8e-1111-4000-8000-00000000abcd");
    assert_eq!(menu.name, "Brunch");
    assert!(menu.created_at > 0);
    assert_eq!(state.menus().find_all(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_menu_update_rejects_past_window() {
    let state = common::test_state().await;
    let now = now_millis();

    let err = state
        .menus()
        .update(
            "any",
            MenuUpdate {
                start_date: Some(now - 60_000),
                end_date: Some(now + 60_000),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::InvalidTimeWindow));

    let ok = state
        .menus()
        .update(
            "any",
            MenuUpdate {
                start_date: Some(now + 60_000),
                end_date: Some(now + 120_000),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(ok.end_date, Some(now + 120_000));
}

#[tokio::test]
async fn test_unknown_reference_inserts_nothing() {
    let state = common::test_state().await;

    let err = state
        .foods()
        .create(FoodCreate {
            name: "Ghost".into(),
            price: 1.0,
            food_image: "/img/ghost.png".into(),
            menu_id: "missing-menu".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Reference("menu")));
    assert!(state.foods().find_all(None).await.unwrap().is_empty());

    let err = state
        .orders()
        .create(OrderCreate {
            order_date: None,
            table_id: "missing-table".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Reference("table")));
    assert!(state.orders().find_all(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_rechecks_references() {
    let state = common::test_state().await;
    let (_, soup_id, _) = seed_menu_and_foods(&state).await;
    let table = state
        .tables()
        .create(DiningTableCreate {
            number_of_guests: 2,
            table_number: 3,
        })
        .await
        .unwrap();
    let items = state
        .order_items()
        .create_pack(OrderItemPack {
            table_id: Some(table.table_id.clone()),
            order_id: None,
            order_items: vec![OrderItemCreate {
                quantity: ItemQuantity::M,
                unit_price: 12.0,
                food_id: soup_id.clone(),
            }],
        })
        .await
        .unwrap();
    let item = &items[0];

    let err = state
        .foods()
        .update(
            &soup_id,
            FoodUpdate {
                menu_id: Some("missing-menu".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Reference("menu")));

    let err = state
        .orders()
        .update(
            &item.order_id,
            OrderUpdate {
                order_date: None,
                table_id: Some("missing-table".into()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Reference("table")));

    let err = state
        .order_items()
        .update(
            &item.order_item_id,
            OrderItemUpdate {
                food_id: Some("missing-food".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Reference("food")));

    let soup = state.foods().find_by_id(&soup_id).await.unwrap().unwrap();
    assert_ne!(soup.menu_id, "missing-menu");
    let order = state.orders().find_by_id(&item.order_id).await.unwrap().unwrap();
    assert_eq!(order.table_id, table.table_id);
    let stored = state
        .order_items()
        .find_by_id(&item.order_item_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, *item);
}

#[tokio::test]
async fn test_update_rounds_prices() {
    let state = common::test_state().await;
    let (_, soup_id, _) = seed_menu_and_foods(&state).await;
    let items = state
        .order_items()
        .create_pack(OrderItemPack {
            table_id: Some(
                state
                    .tables()
                    .create(DiningTableCreate {
                        number_of_guests: 2,
                        table_number: 4,
                    })
                    .await
                    .unwrap()
                    .table_id,
            ),
            order_id: None,
            order_items: vec![OrderItemCreate {
                quantity: ItemQuantity::S,
                unit_price: 12.0,
                food_id: soup_id.clone(),
            }],
        })
        .await
        .unwrap();

    let soup = state
        .foods()
        .update(
            &soup_id,
            FoodUpdate {
                price: Some(19.995),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(soup.price, 20.0);

    let item = state
        .order_items()
        .update(
            &items[0].order_item_id,
            OrderItemUpdate {
                unit_price: Some(19.995),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(item.unit_price, 20.0);
    assert_eq!(item.food_id, soup_id);
}

#[tokio::test]
async fn test_out_of_range_price_is_rejected_not_zeroed() {
    let state = common::test_state().await;
    let (menu_id, soup_id, _) = seed_menu_and_foods(&state).await;

    let err = state
        .foods()
        .create(FoodCreate {
            name: "Gilded".into(),
            price: 1e29,
            food_image: "/img/gilded.png".into(),
            menu_id,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let err = state
        .foods()
        .update(
            &soup_id,
            FoodUpdate {
                price: Some(1e29),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    let soup = state.foods().find_by_id(&soup_id).await.unwrap().unwrap();
    assert_eq!(soup.price, 12.0);
    assert_eq!(state.foods().find_all(None).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_food_price_is_rounded() {
    let state = common::test_state().await;
    let (menu_id, _, _) = seed_menu_and_foods(&state).await;

    let food = state
        .foods()
        .create(FoodCreate {
            name: "Pie".into(),
            price: 19.995,
            food_image: "/img/pie.png".into(),
            menu_id,
        })
        .await
        .unwrap();
    assert_eq!(food.price, 20.00);
}

#[tokio::test]
async fn test_pack_with_unknown_food_opens_no_order() {
    let state = common::test_state().await;
    let table = state
        .tables()
        .create(DiningTableCreate {
            number_of_guests: 2,
            table_number: 1,
        })
        .await
        .unwrap();

    let err = state
        .order_items()
        .create_pack(OrderItemPack {
            table_id: Some(table.table_id),
            order_id: None,
            order_items: vec![OrderItemCreate {
                quantity: ItemQuantity::M,
                unit_price: 3.0,
                food_id: "missing-food".into(),
            }],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Reference("food")));
    assert!(state.orders().find_all(None).await.unwrap().is_empty());
    assert!(state.order_items().find_all(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_pack_with_unknown_order_is_rejected() {
    let state = common::test_state().await;
    let (_, soup, _) = seed_menu_and_foods(&state).await;

    let err = state
        .order_items()
        .create_pack(OrderItemPack {
            table_id: None,
            order_id: Some("missing-order".into()),
            order_items: vec![OrderItemCreate {
                quantity: ItemQuantity::S,
                unit_price: 12.0,
                food_id: soup,
            }],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Reference("order")));
}

#[tokio::test]
async fn test_table_order_items_billing_scenario() {
    let state = common::test_state().await;
    let (_, soup, salad) = seed_menu_and_foods(&state).await;

    let table = state
        .tables()
        .create(DiningTableCreate {
            number_of_guests: 4,
            table_number: 5,
        })
        .await
        .unwrap();
    let order = state
        .orders()
        .create(OrderCreate {
            order_date: None,
            table_id: table.table_id.clone(),
        })
        .await
        .unwrap();

    let items = state
        .order_items()
        .create_pack(OrderItemPack {
            table_id: None,
            order_id: Some(order.order_id.clone()),
            order_items: vec![
                OrderItemCreate {
                    quantity: ItemQuantity::M,
                    unit_price: 12.00,
                    food_id: soup,
                },
                OrderItemCreate {
                    quantity: ItemQuantity::S,
                    unit_price: 8.25,
                    food_id: salad,
                },
            ],
        })
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i.order_id == order.order_id));

    let billings = compute_order_billing(&state.db, &order.order_id).await.unwrap();
    assert_eq!(billings.len(), 1);

    let billing = first_billing(&order.order_id, billings).unwrap();
    assert_eq!(billing.payment_due, 20.25);
    assert_eq!(billing.total_count, 2);
    assert_eq!(billing.table_number, Some(5));

    let mut names: Vec<_> = billing
        .order_items
        .iter()
        .filter_map(|l| l.food_name.clone())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Salad".to_string(), "Soup".to_string()]);
}

#[tokio::test]
async fn test_pack_opens_order_for_table() {
    let state = common::test_state().await;
    let (_, soup, _) = seed_menu_and_foods(&state).await;
    let table = state
        .tables()
        .create(DiningTableCreate {
            number_of_guests: 2,
            table_number: 9,
        })
        .await
        .unwrap();

    let items = state
        .order_items()
        .create_pack(OrderItemPack {
            table_id: Some(table.table_id.clone()),
            order_id: None,
            order_items: vec![OrderItemCreate {
                quantity: ItemQuantity::L,
                unit_price: 12.0,
                food_id: soup,
            }],
        })
        .await
        .unwrap();

    let order = state
        .orders()
        .find_by_id(&items[0].order_id)
        .await
        .unwrap()
        .expect("order opened by the pack");
    assert_eq!(order.table_id, table.table_id);
}

#[tokio::test]
async fn test_invoice_defaults_and_view() {
    let state = common::test_state().await;
    let (_, soup, salad) = seed_menu_and_foods(&state).await;
    let table = state
        .tables()
        .create(DiningTableCreate {
            number_of_guests: 4,
            table_number: 5,
        })
        .await
        .unwrap();
    let items = state
        .order_items()
        .create_pack(OrderItemPack {
            table_id: Some(table.table_id),
            order_id: None,
            order_items: vec![
                OrderItemCreate {
                    quantity: ItemQuantity::M,
                    unit_price: 10.00,
                    food_id: soup,
                },
                OrderItemCreate {
                    quantity: ItemQuantity::M,
                    unit_price: 15.50,
                    food_id: salad,
                },
            ],
        })
        .await
        .unwrap();
    let order_id = items[0].order_id.clone();

    let before = now_millis();
    let invoice = state
        .invoices()
        .create(InvoiceCreate {
            order_id: order_id.clone(),
            payment_method: None,
            payment_status: None,
        })
        .await
        .unwrap();
    assert_eq!(invoice.payment_status, PaymentStatus::Pending);
    let day = 24 * 60 * 60 * 1000;
    assert!(invoice.payment_due_date >= before + day - 1_000);
    assert!(invoice.payment_due_date <= now_millis() + day + 1_000);

    let view = state
        .invoices()
        .view(&invoice.invoice_id)
        .await
        .unwrap()
        .expect("invoice view");
    assert_eq!(view.order_id, order_id);
    assert_eq!(view.payment_due, 25.50);
    assert_eq!(view.table_number, Some(5));
    assert_eq!(view.order_details.len(), 2);
}

#[tokio::test]
async fn test_invoice_for_empty_order() {
    let state = common::test_state().await;
    let table = state
        .tables()
        .create(DiningTableCreate {
            number_of_guests: 1,
            table_number: 3,
        })
        .await
        .unwrap();
    let order = state
        .orders()
        .create(OrderCreate {
            order_date: None,
            table_id: table.table_id,
        })
        .await
        .unwrap();

    assert!(
        compute_order_billing(&state.db, &order.order_id)
            .await
            .unwrap()
            .is_empty()
    );

    let invoice = state
        .invoices()
        .create(InvoiceCreate {
            order_id: order.order_id.clone(),
            payment_method: None,
            payment_status: Some(PaymentStatus::Paid),
        })
        .await
        .unwrap();
    assert_eq!(invoice.payment_status, PaymentStatus::Paid);

    let err = state.invoices().view(&invoice.invoice_id).await.unwrap_err();
    assert!(matches!(err, RepoError::NoItemsForOrder(id) if id == order.order_id));

    let err = state
        .invoices()
        .create(InvoiceCreate {
            order_id: "missing-order".into(),
            payment_method: None,
            payment_status: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Reference("order")));
}

fn signup_request(email: &str, phone: &str) -> SignupRequest {
    SignupRequest {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        password: "correct-horse".into(),
        email: email.into(),
        phone: phone.into(),
        user_type: UserType::Admin,
    }
}

#[tokio::test]
async fn test_signup_login_and_tokens() {
    let state = common::test_state().await;
    let users = state.users();

    let user = users
        .signup(signup_request("ada@example.com", "555-0100"))
        .await
        .unwrap();
    assert_eq!(user.user_type, UserType::Admin);
    assert_eq!(user.token, None);

    let err = users
        .signup(signup_request("ada@example.com", "555-0199"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
    let err = users
        .signup(signup_request("other@example.com", "555-0100"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));

    assert!(
        users
            .authenticate("ada@example.com", "wrong-password")
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        users
            .authenticate("nobody@example.com", "correct-horse")
            .await
            .unwrap()
            .is_none()
    );
    let authed = users
        .authenticate("ada@example.com", "correct-horse")
        .await
        .unwrap()
        .expect("valid credentials");
    assert_eq!(authed.user_id, user.user_id);

    let updated = users
        .update_all_tokens(&user.user_id, "access-1", "refresh-1")
        .await
        .unwrap();
    assert_eq!(updated.token.as_deref(), Some("access-1"));
    assert_eq!(updated.refresh_token.as_deref(), Some("refresh-1"));
    assert_eq!(updated.email, "ada@example.com");
    assert!(updated.updated_at > user.updated_at);
}
