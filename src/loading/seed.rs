//! The fixed seed knowledge graph: a painting, its creator, a museum, a film
//! about the creator and three present-day observers.

use oxigraph::model::{Literal, NamedNode};

use crate::core::namespace::{ART, BIO, DC, FOAF, MEDIA, PERSON, SKOS};
use crate::core::EntityKind;
use crate::error::Result;
use crate::store::TripleStore;

pub fn mona_lisa() -> NamedNode {
    ART.term("MonaLisa")
}

pub fn louvre() -> NamedNode {
    ART.term("Louvre")
}

pub fn leonardo() -> NamedNode {
    PERSON.term("LeonardoDaVinci")
}

pub fn leonardo_movie() -> NamedNode {
    MEDIA.term("LeonardoMovie2023")
}

pub fn bob() -> NamedNode {
    PERSON.term("Bob")
}

pub fn alice() -> NamedNode {
    PERSON.term("Alice")
}

pub fn charlie() -> NamedNode {
    PERSON.term("Charlie")
}

fn text(value: &str) -> Literal {
    Literal::new_simple_literal(value)
}

/// Populate `store` with the whole seed graph.
pub fn load_seed_data(store: &mut TripleStore) -> Result<()> {
    add_artwork_info(store)?;
    add_people_relations(store)?;
    Ok(())
}

/// Painting, film, museum and the painter.
pub fn add_artwork_info(store: &mut TripleStore) -> Result<()> {
    let mona_lisa = mona_lisa();
    let leonardo = leonardo();
    let louvre = louvre();
    let movie = leonardo_movie();

    store.declare(&mona_lisa, EntityKind::Painting)?;
    store.add_fact(&mona_lisa, &DC.term("title"), text("Мона Лиза"));
    store.add_fact(&mona_lisa, &SKOS.term("prefLabel"), text("Мона Лиза"));
    store.add_fact(&mona_lisa, &SKOS.term("altLabel"), text("Джоконда"));
    store.add_fact(&mona_lisa, &DC.term("creator"), leonardo.clone());
    store.add_fact(&mona_lisa, &DC.term("date"), text("1503-1519"));
    store.add_fact(&mona_lisa, &ART.term("medium"), text("масло, тополиная доска"));
    store.add_fact(&mona_lisa, &ART.term("dimensions"), text("77 × 53 см"));
    store.add_fact(
        &mona_lisa,
        &DC.term("description"),
        text("Знаменитый портрет работы Леонардо да Винчи, также известный как «Джоконда». Одна из самых известных картин в мире."),
    );
    store.add_fact(&mona_lisa, &ART.term("period"), text("Высокое Возрождение"));
    store.add_fact(&mona_lisa, &ART.term("technique"), text("сфумато"));
    store.add_fact(&mona_lisa, &ART.term("location"), louvre.clone());

    store.declare(&movie, EntityKind::Movie)?;
    store.add_fact(&movie, &DC.term("title"), text("Leonardo"));
    store.add_fact(&movie, &DC.term("date"), text("2023"));
    store.add_fact(
        &movie,
        &DC.term("description"),
        text("Биографический фильм о жизни Леонардо да Винчи, рассказывающий о его становлении как художника и учёного"),
    );
    store.add_fact(&movie, &MEDIA.term("starring"), text("Эйдан Тёрнер"));
    store.add_fact(&movie, &MEDIA.term("director"), text("Дэниэл Персивал"));
    store.add_fact(&movie, &DC.term("subject"), leonardo.clone());

    store.declare(&louvre, EntityKind::Museum)?;
    store.add_fact(&louvre, &DC.term("title"), text("Лувр"));
    store.add_fact(&louvre, &ART.term("location"), text("Париж, Франция"));
    store.add_fact(
        &louvre,
        &DC.term("description"),
        text("Один из крупнейших и наиболее известных художественных музеев мира, расположенный в центре Парижа"),
    );
    store.add_fact(&louvre, &ART.term("founded"), text("1793"));

    store.declare(&leonardo, EntityKind::Person)?;
    store.add_fact(&leonardo, &FOAF.term("name"), text("Леонардо да Винчи"));
    store.add_fact(&leonardo, &BIO.term("birthDate"), text("1452-04-15"));
    store.add_fact(&leonardo, &BIO.term("deathDate"), text("1519-05-02"));
    store.add_fact(&leonardo, &BIO.term("birthPlace"), text("Анкиано, Флорентийская республика"));
    store.add_fact(&leonardo, &BIO.term("nationality"), text("итальянский"));
    store.add_fact(&leonardo, &BIO.term("profession"), text("художник, учёный, изобретатель"));
    store.add_fact(
        &leonardo,
        &DC.term("description"),
        text("Великий итальянский художник и учёный эпохи Возрождения, один из самых известных полимеров в истории"),
    );
    store.add_fact(&leonardo, &ART.term("notableWorks"), mona_lisa);

    Ok(())
}

struct Observer<'a> {
    node: NamedNode,
    name: &'a str,
    birth_date: &'a str,
    occupation: &'a str,
    education: &'a str,
    description: &'a str,
    watched_movie: bool,
}

fn add_observer(store: &mut TripleStore, observer: &Observer<'_>) -> Result<()> {
    let node = &observer.node;
    store.declare(node, EntityKind::Person)?;
    store.add_fact(node, &FOAF.term("name"), text(observer.name));
    store.add_fact(node, &BIO.term("birthDate"), text(observer.birth_date));
    store.add_fact(node, &BIO.term("occupation"), text(observer.occupation));
    store.add_fact(node, &BIO.term("education"), text(observer.education));
    store.add_fact(node, &DC.term("description"), text(observer.description));
    store.add_fact(node, &FOAF.term("topic_interest"), mona_lisa());
    store.add_fact(node, &ART.term("hasVisited"), louvre());
    if observer.watched_movie {
        store.add_fact(node, &MEDIA.term("hasWatched"), leonardo_movie());
    }
    Ok(())
}

/// The three observers and the relations between them.
pub fn add_people_relations(store: &mut TripleStore) -> Result<()> {
    let (bob, alice, charlie) = (bob(), alice(), charlie());

    add_observer(
        store,
        &Observer {
            node: bob.clone(),
            name: "Боб",
            birth_date: "1990-01-15",
            occupation: "историк искусства",
            education: "PhD в истории искусств",
            description: "Историк искусства, специализирующийся на эпохе Возрождения и творчестве Леонардо да Винчи",
            watched_movie: true,
        },
    )?;
    add_observer(
        store,
        &Observer {
            node: alice.clone(),
            name: "Алиса",
            birth_date: "1992-03-20",
            occupation: "реставратор произведений искусства",
            education: "Магистр в области реставрации",
            description: "Реставратор произведений искусства, специализируется на картинах эпохи Возрождения",
            watched_movie: true,
        },
    )?;
    add_observer(
        store,
        &Observer {
            node: charlie.clone(),
            name: "Чарли",
            birth_date: "1988-07-10",
            occupation: "музейный гид",
            education: "Бакалавр искусствоведения",
            description: "Профессиональный гид в музее, проводит экскурсии по залам с картинами эпохи Возрождения",
            watched_movie: false,
        },
    )?;

    let knows = FOAF.term("knows");
    store.add_fact(&bob, &knows, alice.clone());
    store.add_fact(&alice, &knows, bob.clone());
    store.add_fact(&alice, &knows, charlie.clone());
    store.add_fact(&bob, &PERSON.term("collaboratesWith"), charlie.clone());
    store.add_fact(&alice, &PERSON.term("mentors"), charlie);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_fact_count() {
        let mut store = TripleStore::new();
        load_seed_data(&mut store).unwrap();

        // painting 12, movie 7, museum 5, painter 9, observers 9 + 9 + 8, relations 5
        assert_eq!(store.len(), 64);
    }

    #[test]
    fn test_seed_entity_kinds() {
        let mut store = TripleStore::new();
        load_seed_data(&mut store).unwrap();

        let counts = store.entity_counts();
        assert_eq!(counts.get(&EntityKind::Person), Some(&4));
        assert_eq!(counts.get(&EntityKind::Painting), Some(&1));
        assert_eq!(counts.get(&EntityKind::Museum), Some(&1));
        assert_eq!(counts.get(&EntityKind::Movie), Some(&1));
        assert_eq!(store.kind_of(leonardo_movie().as_str()), Some(EntityKind::Movie));
    }

    #[test]
    fn test_loading_twice_is_idempotent() {
        let mut store = TripleStore::new();
        load_seed_data(&mut store).unwrap();
        load_seed_data(&mut store).unwrap();
        assert_eq!(store.len(), 64);
    }
}
