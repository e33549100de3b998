use sqlscribe_core::{sql, QueryBuilder};

fn main() {
    // SELECT with joins, grouped predicates and vendor-style paging
    let mut select = sql();
    select
        .select(["P.ID", "P.USERNAME", "P.FIRST_NAME"])
        .from("PERSON P")
        .inner_join("DEPARTMENT D on D.ID = P.DEPARTMENT_ID")
        .where_("P.ID like #{id}")
        .or()
        .where_("P.USERNAME like #{username}")
        .order_by("P.ID")
        .limit("#{limit}")
        .offset("#{offset}");

    println!("SELECT SQL:\n{}\n", select.to_sql().unwrap().unwrap_or_default());

    // Multi-row INSERT
    let mut insert = sql();
    insert
        .insert_into("PERSON")
        .into_columns(["ID", "USERNAME"])
        .into_values(["#{a.id}", "#{a.username}"])
        .add_row()
        .into_values(["#{b.id}", "#{b.username}"]);

    println!("INSERT SQL:\n{}\n", insert.to_sql().unwrap().unwrap_or_default());

    // UPDATE with ISO row limiting (only the limit is rendered)
    let mut update = sql();
    update
        .update("PERSON")
        .set(["USERNAME = #{username}", "ACTIVE = 1"])
        .where_("ID = #{id}")
        .fetch_first_rows_only(1);

    println!("UPDATE SQL:\n{}\n", update.to_sql().unwrap().unwrap_or_default());

    // DELETE rendered into a caller-supplied buffer
    let mut delete = sql();
    delete.delete_from("PERSON").where_("ID = #{id}");

    let mut buffer = String::from("-- cleanup\n");
    delete.write_sql(&mut buffer).unwrap();
    println!("DELETE SQL:\n{}\n", buffer);

    // Nothing chosen yet: no statement at all
    let empty = sql();
    println!("Unset builder renders: {:?}", empty.to_sql().unwrap());
}
