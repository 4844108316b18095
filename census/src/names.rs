//! Name Generation for Employees
//!
//! Gender-specific given names, surnames and patronymics. The female and male
//! lists are disjoint.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::record::Gender;

const MALE_GIVEN_NAMES: &[&str] = &[
    "Олександр", "Андрій", "Іван", "Петро", "Сергій", "Микола", "Володимир", "Олег",
    "Юрій", "Віктор", "Богдан", "Роман", "Тарас", "Ігор", "Степан", "Григорій",
    "Дмитро", "Михайло", "Максим", "Василь", "Остап", "Назар", "Євген", "Ярослав",
];

const FEMALE_GIVEN_NAMES: &[&str] = &[
    "Олена", "Оксана", "Ірина", "Наталія", "Тетяна", "Марія", "Світлана", "Юлія",
    "Галина", "Людмила", "Катерина", "Анна", "Софія", "Дарина", "Вікторія", "Христина",
    "Ольга", "Лариса", "Надія", "Леся", "Мирослава", "Зоряна", "Соломія", "Богдана",
];

const MALE_SURNAMES: &[&str] = &[
    "Шевченко", "Коваленко", "Бондаренко", "Ткаченко", "Кравченко", "Олійник",
    "Мельник", "Шевчук", "Поліщук", "Бойко", "Ковальчук", "Савченко", "Руденко",
    "Лисенко", "Мороз", "Марченко", "Кравчук", "Павленко", "Петренко", "Гончаренко",
    "Сидоренко", "Литвиненко", "Лозинський", "Ковальський", "Зарицький", "Білий",
];

const FEMALE_SURNAMES: &[&str] = &[
    "Шевченко", "Коваленко", "Бондаренко", "Ткаченко", "Кравченко", "Олійник",
    "Мельник", "Шевчук", "Поліщук", "Бойко", "Ковальчук", "Савченко", "Руденко",
    "Лисенко", "Мороз", "Марченко", "Кравчук", "Павленко", "Петренко", "Гончаренко",
    "Сидоренко", "Литвиненко", "Лозинська", "Ковальська", "Зарицька", "Біла",
];

const MALE_PATRONYMICS: &[&str] = &[
    "Іванович", "Петрович", "Олексійович", "Андрійович", "Олегович",
    "Сергійович", "Миколайович", "Володимирович", "Анатолійович", "Юрійович",
    "Вікторович", "Богданович", "Романович", "Тарасович", "Ігорович",
    "Степанович", "Олександрович", "Григорович", "Дмитрович", "Михайлович",
];

const FEMALE_PATRONYMICS: &[&str] = &[
    "Іванівна", "Петрівна", "Олексіївна", "Андріївна", "Олегівна",
    "Сергіївна", "Миколаївна", "Володимирівна", "Анатоліївна", "Юріївна",
    "Вікторівна", "Богданівна", "Романівна", "Тарасівна", "Ігорівна",
    "Степанівна", "Олександрівна", "Григорівна", "Дмитрівна", "Михайлівна",
];

fn pick<R: Rng + ?Sized>(list: &'static [&'static str], rng: &mut R) -> &'static str {
    list.choose(rng).copied().unwrap_or_default()
}

pub fn random_given_name<R: Rng + ?Sized>(gender: Gender, rng: &mut R) -> &'static str {
    match gender {
        Gender::Female => pick(FEMALE_GIVEN_NAMES, rng),
        Gender::Male => pick(MALE_GIVEN_NAMES, rng),
    }
}

pub fn random_surname<R: Rng + ?Sized>(gender: Gender, rng: &mut R) -> &'static str {
    match gender {
        Gender::Female => pick(FEMALE_SURNAMES, rng),
        Gender::Male => pick(MALE_SURNAMES, rng),
    }
}

pub fn random_patronymic<R: Rng + ?Sized>(gender: Gender, rng: &mut R) -> &'static str {
    match gender {
        Gender::Female => pick(FEMALE_PATRONYMICS, rng),
        Gender::Male => pick(MALE_PATRONYMICS, rng),
    }
}
