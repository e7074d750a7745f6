diesel::table! {
    customer (row_id) {
        row_id -> Int4,
        customer_id -> Nullable<Text>,
        age -> Nullable<Int8>,
        gender -> Nullable<Text>,
        item_purchased -> Nullable<Text>,
        category -> Nullable<Text>,
        purchase_amount -> Float8,
        review_rating -> Nullable<Float8>,
        rating_category -> Nullable<Text>,
        spending_segment -> Nullable<Text>,
        purchase_date -> Nullable<Date>,
        month -> Nullable<Int4>,
        weekday -> Nullable<Text>,
    }
}
