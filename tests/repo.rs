use movies_api::{
    db,
    entities::{director, genre},
    models::{MovieFields, MovieFilter, NameFields},
    repo::{DirectorRepo, GenreRepo, MovieRepo},
};
use sea_orm::ModelTrait;

#[tokio::test]
async fn movie_relations_resolve_through_foreign_keys() {
    let db = db::connect_and_migrate("sqlite::memory:").await.unwrap();
    let movies = MovieRepo::new(db.clone());
    let directors = DirectorRepo::new(db.clone());
    let genres = GenreRepo::new(db.clone());

    let director_id =
        directors.insert(None, NameFields { name: Some("Villeneuve".into()) }).await.unwrap();
    let genre_id = genres.insert(None, NameFields { name: Some("Sci-Fi".into()) }).await.unwrap();
    let movie_id = movies
        .insert(
            None,
            MovieFields {
                title: Some("Arrival".into()),
                year: Some(2016),
                director_id: Some(director_id),
                genre_id: Some(genre_id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let movie = movies.get(movie_id).await.unwrap().unwrap();
    let director = movie.find_related(director::Entity).one(&db).await.unwrap().unwrap();
    let genre = movie.find_related(genre::Entity).one(&db).await.unwrap().unwrap();
    assert_eq!(director.name.as_deref(), Some("Villeneuve"));
    assert_eq!(genre.name.as_deref(), Some("Sci-Fi"));
}

#[tokio::test]
async fn replace_and_delete_report_missing_rows() {
    let db = db::connect_and_migrate("sqlite::memory:").await.unwrap();
    let movies = MovieRepo::new(db);

    let err = movies
        .replace(5, || panic!("fields are only decoded for an existing row"))
        .await
        .unwrap_err();
    assert!(matches!(err, movies_api::error::AppError::NotFound));
    let err = movies.delete(5).await.unwrap_err();
    assert!(matches!(err, movies_api::error::AppError::NotFound));
}

#[tokio::test]
async fn list_applies_both_filters() {
    let db = db::connect_and_migrate("sqlite::memory:").await.unwrap();
    let movies = MovieRepo::new(db);

    for (director_id, genre_id) in [(1, 1), (1, 2), (2, 2)] {
        movies
            .insert(
                None,
                MovieFields {
                    director_id: Some(director_id),
                    genre_id: Some(genre_id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    let both = movies
        .list(MovieFilter { director_id: Some(1), genre_id: Some(2) })
        .await
        .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].id, 2);

    let by_genre = movies.list(MovieFilter { director_id: None, genre_id: Some(2) }).await.unwrap();
    assert_eq!(by_genre.iter().map(|m| m.id).collect::<Vec<_>>(), [2, 3]);

    assert_eq!(movies.list(MovieFilter::default()).await.unwrap().len(), 3);
}

#[tokio::test]
async fn failed_replace_leaves_the_row_untouched() {
    let db = db::connect_and_migrate("sqlite::memory:").await.unwrap();
    let directors = DirectorRepo::new(db);

    let id = directors.insert(None, NameFields { name: Some("Mann".into()) }).await.unwrap();
    let err = directors
        .replace(id, || Err(anyhow::anyhow!("bad body").into()))
        .await
        .unwrap_err();
    assert!(matches!(err, movies_api::error::AppError::Internal(_)));

    // The rolled-back transaction must have released the only pooled connection.
    let row = directors.get(id).await.unwrap().unwrap();
    assert_eq!(row.name.as_deref(), Some("Mann"));

    directors
        .replace(id, || Ok(NameFields { name: Some("Michael Mann".into()) }))
        .await
        .unwrap();
    let row = directors.get(id).await.unwrap().unwrap();
    assert_eq!(row.name.as_deref(), Some("Michael Mann"));
}
